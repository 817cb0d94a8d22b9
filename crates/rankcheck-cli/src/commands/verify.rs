//! Verify command

use crate::app::VerifyArgs;
use anyhow::Result;
use rankcheck_core::{reference_scores, verify, CanonicalGraph, PageRankConfig};

pub fn run(args: VerifyArgs) -> Result<()> {
    let graph = CanonicalGraph::from_path(&args.graph)?;
    println!(
        "Graph:           {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let reference = reference_scores(&graph, PageRankConfig::default());
    let report = verify(&reference, &args.candidate, args.tolerance)?;

    println!(
        "Verification passed: {} values within {} of the reference (max difference {:.3e})",
        report.compared, args.tolerance, report.max_difference
    );
    Ok(())
}
