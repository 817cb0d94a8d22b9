//! Normalize command

use crate::app::NormalizeArgs;
use anyhow::Result;
use rankcheck_core::derived_output_path;

pub fn run(args: NormalizeArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| derived_output_path(&args.input));

    let summary = rankcheck_core::normalize(&args.input, &output)?;

    println!("Nodes:           {}", summary.nodes);
    println!("Edges:           {}", summary.edges);
    println!("Max identifier:  {}", summary.max_identifier);
    println!("Written to:      {}", summary.output_path.display());
    Ok(())
}
