//! Normalization and scoring performance benchmarks
//!
//! Measures performance of:
//! - Raw edge-list normalization end to end
//! - Canonical graph loading
//! - Reference PageRank scoring

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rankcheck_core::{normalize, reference_scores, CanonicalGraph, PageRankConfig};
use std::fs;
use tempfile::TempDir;

/// Ring graph over deliberately sparse identifiers, with the comment and
/// node-block noise a raw file tends to carry.
fn generate_raw_graph(nodes: usize) -> String {
    let mut content = String::from("# benchmark graph\n*\n");
    for i in 0..nodes {
        content.push_str(&format!("{}\n", i * 17 + 3));
    }
    content.push_str("*\n");
    for i in 0..nodes {
        let from = i * 17 + 3;
        let to = ((i + 1) % nodes) * 17 + 3;
        content.push_str(&format!("{} {}\n", from, to));
    }
    content
}

fn ring_graph(nodes: usize) -> CanonicalGraph {
    let edges: Vec<(usize, usize)> = (0..nodes).map(|i| (i, (i + 1) % nodes)).collect();
    CanonicalGraph::from_edges(nodes, &edges)
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for nodes in [100, 1000] {
        let content = generate_raw_graph(nodes);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &content, |b, content| {
            b.iter_batched(
                || {
                    let temp = TempDir::new().unwrap();
                    let input = temp.path().join("graph.txt");
                    fs::write(&input, content).unwrap();
                    let output = temp.path().join("graph_out.txt");
                    (input, output, temp)
                },
                |(input, output, _temp)| {
                    normalize(&input, &output).unwrap();
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_graph_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_loading");
    let temp = TempDir::new().unwrap();

    for nodes in [100usize, 1000] {
        let mut canonical = format!("{}\t{}\n", nodes, nodes);
        for i in 0..nodes {
            canonical.push_str(&format!("{}\t{}\n", i, (i + 1) % nodes));
        }
        let path = temp.path().join(format!("ring_{nodes}.txt"));
        fs::write(&path, canonical).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(nodes), &path, |b, path| {
            b.iter(|| CanonicalGraph::from_path(black_box(path)).unwrap());
        });
    }

    group.finish();
}

fn bench_reference_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_scores");
    group.sample_size(20);

    for nodes in [100, 1000] {
        let graph = ring_graph(nodes);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &graph, |b, graph| {
            b.iter(|| reference_scores(black_box(graph), PageRankConfig::default()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_graph_loading,
    bench_reference_scores,
);
criterion_main!(benches);
