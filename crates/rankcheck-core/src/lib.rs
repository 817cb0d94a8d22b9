//! RankCheck Core Library
//!
//! Core functionality for the rankcheck graph normalization and PageRank
//! verification tools.
//!
//! # Features
//! - Normalization of raw edge lists into dense zero-based canonical form
//! - Canonical graph loading with strict line-level validation
//! - Reference PageRank scoring by damped power iteration
//! - Positional tolerance checking of candidate score files
//! - Timing log aggregation into JSON summaries

pub mod error;
pub mod graph;
mod input;
pub mod normalize;
pub mod summary;
pub mod verify;

pub use error::{Error, RankCheckError, Result};
pub use graph::{reference_scores, CanonicalGraph, PageRankConfig, ScoreVector};
pub use normalize::{
    derived_output_path, normalize, IdentifierMapping, NormalizeSummary, Section,
};
pub use summary::{summarize_logs, write_summaries, LogSummary, TimingStats};
pub use verify::{verify, VerifyReport};

/// Tolerance used when the caller does not supply one.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;
