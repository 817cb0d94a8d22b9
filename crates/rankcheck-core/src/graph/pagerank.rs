//! Reference PageRank scores by damped power iteration

use super::CanonicalGraph;
use petgraph::visit::EdgeRef;

/// One score per dense node index.
pub type ScoreVector = Vec<f64>;

/// Power-iteration parameters.
///
/// The iteration count is fixed rather than convergence-driven; the
/// defaults converge far below any tolerance a verification run would use.
#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    pub damping: f64,
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 100,
        }
    }
}

/// Compute the reference score vector for a canonical graph.
///
/// Standard damped PageRank: every node receives the uniform teleport share
/// `(1 - d) / n`, dangling nodes spread their mass uniformly over all
/// nodes, and each node pushes `d * score / out_degree` along every
/// outgoing edge. Parallel edges each carry their own share, so a repeated
/// edge weights its target accordingly.
///
/// Scores are indexed by dense node index, so `scores[i]` lines up with
/// line i of a candidate file. An empty graph yields an empty vector.
pub fn reference_scores(graph: &CanonicalGraph, config: PageRankConfig) -> ScoreVector {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    tracing::debug!(
        "computing reference scores: {} nodes, damping {}, {} iterations",
        n,
        config.damping,
        config.iterations
    );

    let nodes = n as f64;
    let teleport = (1.0 - config.damping) / nodes;
    let out_degrees: Vec<usize> = graph
        .petgraph()
        .node_indices()
        .map(|node| graph.petgraph().edges(node).count())
        .collect();

    let mut scores = vec![1.0 / nodes; n];
    let mut next = vec![0.0; n];
    for _ in 0..config.iterations {
        let dangling: f64 = scores
            .iter()
            .zip(&out_degrees)
            .filter(|(_, &degree)| degree == 0)
            .map(|(score, _)| score)
            .sum();
        next.fill(teleport + config.damping * dangling / nodes);

        for edge in graph.petgraph().edge_references() {
            let source = edge.source().index();
            let share = config.damping * scores[source] / out_degrees[source] as f64;
            next[edge.target().index()] += share;
        }
        std::mem::swap(&mut scores, &mut next);
    }
    scores
}
