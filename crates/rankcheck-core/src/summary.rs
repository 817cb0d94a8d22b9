//! Timing log aggregation into per-action statistics
//!
//! Benchmark runs drop one `.txt` log per run into a directory. Each timed
//! line ends in a floating-point number of seconds; everything before it is
//! the action description. The summarizer folds all runs together and writes
//! two JSON files next to the logs: the full per-action statistics and a
//! condensed file holding only the rounded means of `TOTAL` actions.

use crate::error::{RankCheckError, Result};
use crate::input;
use glob::{glob, Pattern};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Per-action statistics file written into the log directory.
pub const SUMMARY_FILE: &str = "summarized.json";
/// Condensed totals file written into the log directory.
pub const FINAL_SUMMARY_FILE: &str = "summarized_final.json";

const TOTAL_TAG: &str = "TOTAL";

/// Aggregated timings for one action description.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TimingStats {
    pub mean: f64,
    /// Population variance over all samples.
    pub variance: f64,
    pub samples: usize,
}

/// All actions aggregated across a directory of timing logs.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LogSummary {
    /// Log files read.
    pub files: usize,
    /// Statistics keyed by action description, in sorted order.
    pub actions: BTreeMap<String, TimingStats>,
}

/// Aggregate every `*.txt` log in `log_dir`.
///
/// A line counts as timed when it ends in a decimal number like `3.141`;
/// its last whitespace-separated token is the value and the rest of the
/// line is the action description. Every action must appear once per log
/// file, so that runs stay comparable.
pub fn summarize_logs(log_dir: &Path) -> Result<LogSummary> {
    if !log_dir.is_dir() {
        return Err(RankCheckError::FileNotFound(log_dir.to_path_buf()));
    }

    let timing = Regex::new(r"\d+\.\d+\s*$").expect("Invalid regex");
    let dir = log_dir.to_str().ok_or_else(|| {
        RankCheckError::InvalidInput(format!("log directory path is not valid UTF-8: {log_dir:?}"))
    })?;
    // The directory name may itself contain glob metacharacters.
    let pattern = format!("{}/*.txt", Pattern::escape(dir));

    let mut files = 0;
    let mut timings: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for entry in glob(&pattern)? {
        let path = entry.map_err(|err| RankCheckError::Io(err.into_error()))?;
        collect_timings(&path, &timing, &mut timings)?;
        files += 1;
    }
    tracing::debug!("collected {} actions from {} log files", timings.len(), files);

    let mut actions = BTreeMap::new();
    for (action, values) in timings {
        if values.len() != files {
            return Err(RankCheckError::InconsistentLogs {
                action,
                samples: values.len(),
                files,
            });
        }
        actions.insert(action, timing_stats(&values));
    }

    Ok(LogSummary { files, actions })
}

/// Write the two JSON summaries into `log_dir` and return their paths.
pub fn write_summaries(summary: &LogSummary, log_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let full: BTreeMap<&String, [f64; 2]> = summary
        .actions
        .iter()
        .map(|(action, stats)| (action, [stats.mean, stats.variance]))
        .collect();
    let totals: BTreeMap<&String, f64> = summary
        .actions
        .iter()
        .filter(|(action, _)| action.contains(TOTAL_TAG))
        .map(|(action, stats)| (action, round3(stats.mean)))
        .collect();

    let full_path = log_dir.join(SUMMARY_FILE);
    let mut writer = BufWriter::new(File::create(&full_path)?);
    serde_json::to_writer_pretty(&mut writer, &full)?;
    writer.flush()?;

    let totals_path = log_dir.join(FINAL_SUMMARY_FILE);
    let mut writer = BufWriter::new(File::create(&totals_path)?);
    serde_json::to_writer_pretty(&mut writer, &totals)?;
    writer.flush()?;

    tracing::info!("wrote {:?} and {:?}", full_path, totals_path);
    Ok((full_path, totals_path))
}

fn collect_timings(
    path: &Path,
    timing: &Regex,
    timings: &mut BTreeMap<String, Vec<f64>>,
) -> Result<()> {
    let reader = input::open_buffered(path)?;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !timing.is_match(&line) {
            continue;
        }
        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(value_token) = tokens.pop() else {
            continue;
        };
        let value: f64 = input::parse_field(value_token, path, index + 1)?;
        timings.entry(tokens.join(" ")).or_default().push(value);
    }
    Ok(())
}

fn timing_stats(values: &[f64]) -> TimingStats {
    let samples = values.len();
    let mean = values.iter().sum::<f64>() / samples as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / samples as f64;
    TimingStats {
        mean,
        variance,
        samples,
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
