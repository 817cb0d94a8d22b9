//! Summarize command

use crate::app::SummarizeArgs;
use anyhow::Result;
use rankcheck_core::{summarize_logs, write_summaries};

pub fn run(args: SummarizeArgs) -> Result<()> {
    let summary = summarize_logs(&args.log_dir)?;

    println!("Log files:       {}", summary.files);
    println!("Actions:         {}", summary.actions.len());

    let (full, totals) = write_summaries(&summary, &args.log_dir)?;
    println!("Written to:      {}", full.display());
    println!("                 {}", totals.display());
    Ok(())
}
