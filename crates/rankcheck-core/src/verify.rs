//! Positional comparison of candidate scores against a reference vector

use crate::error::{RankCheckError, Result};
use crate::input;
use std::io::BufRead;
use std::path::Path;

/// Outcome of a successful verification run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifyReport {
    /// Entries compared (equals the reference length on success).
    pub compared: usize,
    /// Largest absolute difference seen across all entries.
    pub max_difference: f64,
}

/// Compare a candidate score file against a reference vector, line by line.
///
/// Line i of the candidate is checked against `reference[i]`. The run fails
/// on the first entry whose absolute difference reaches `tolerance` (the
/// bound is exclusive: a difference exactly equal to the tolerance fails),
/// on any extra or missing lines, and on anything that does not parse as a
/// single real number. A NaN candidate value never compares within
/// tolerance, and the tolerance itself must be finite and positive.
pub fn verify(reference: &[f64], candidate: &Path, tolerance: f64) -> Result<VerifyReport> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(RankCheckError::InvalidInput(format!(
            "tolerance must be finite and > 0, got {tolerance}"
        )));
    }

    let reader = input::open_buffered(candidate)?;
    let mut compared = 0;
    let mut max_difference = 0.0_f64;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let value: f64 = input::parse_single(&line, candidate, index + 1)?;

        let Some(&expected) = reference.get(index) else {
            return Err(RankCheckError::IndexOutOfRange {
                index,
                nodes: reference.len(),
            });
        };

        let difference = (value - expected).abs();
        if difference.is_nan() || difference >= tolerance {
            return Err(RankCheckError::ToleranceExceeded {
                index,
                candidate: value,
                reference: expected,
                tolerance,
            });
        }
        max_difference = max_difference.max(difference);
        compared += 1;
    }

    if compared < reference.len() {
        return Err(RankCheckError::LengthMismatch {
            expected: reference.len(),
            actual: compared,
        });
    }

    tracing::debug!(
        "verified {:?}: {} entries, max difference {:e}",
        candidate,
        compared,
        max_difference
    );
    Ok(VerifyReport {
        compared,
        max_difference,
    })
}
