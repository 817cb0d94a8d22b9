//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rankcheck")]
#[command(
    author,
    version,
    about = "Graph normalization and PageRank result verification"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a raw edge list into canonical form
    Normalize(NormalizeArgs),

    /// Check candidate PageRank scores against the reference
    Verify(VerifyArgs),

    /// Aggregate timing logs into JSON summaries
    Summarize(SummarizeArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Raw graph file
    pub input: PathBuf,

    /// Output path (defaults to the input with an `_out` stem suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Canonical graph file
    pub graph: PathBuf,

    /// Candidate score file, one value per node
    pub candidate: PathBuf,

    /// Largest tolerated absolute difference (exclusive bound)
    #[arg(long, default_value_t = rankcheck_core::DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

#[derive(Args)]
pub struct SummarizeArgs {
    /// Directory holding the timing logs
    #[arg(default_value = "logs")]
    pub log_dir: PathBuf,
}
