//! Error types for rankcheck

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RankCheckError
pub type Result<T> = std::result::Result<T, RankCheckError>;

/// Error type alias for convenience
pub type Error = RankCheckError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const MISMATCH: i32 = 4;
}

/// Main error type for rankcheck
#[derive(Debug, Error)]
pub enum RankCheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{}:{line}: malformed line: {reason}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("no nodes found in graph file: {}", .0.display())]
    EmptyGraph(PathBuf),

    #[error("value at index {index} diverges: candidate {candidate} vs reference {reference} (tolerance {tolerance})")]
    ToleranceExceeded {
        index: usize,
        candidate: f64,
        reference: f64,
        tolerance: f64,
    },

    #[error("candidate index {index} out of range: reference has {nodes} entries")]
    IndexOutOfRange { index: usize, nodes: usize },

    #[error("candidate file has {actual} entries, reference has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("action '{action}' has {samples} samples across {files} log files (expected one per file)")]
    InconsistentLogs {
        action: String,
        samples: usize,
        files: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RankCheckError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound(_) => exit_codes::NOT_FOUND,
            Self::MalformedLine { .. }
            | Self::EmptyGraph(_)
            | Self::InconsistentLogs { .. }
            | Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            Self::ToleranceExceeded { .. }
            | Self::IndexOutOfRange { .. }
            | Self::LengthMismatch { .. } => exit_codes::MISMATCH,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
