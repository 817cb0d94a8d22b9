//! Line-oriented input helpers shared by the file-format parsers

use crate::error::{RankCheckError, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Open a file for buffered line reading, mapping a missing path to
/// [`RankCheckError::FileNotFound`].
pub(crate) fn open_buffered(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(RankCheckError::FileNotFound(path.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Build a [`RankCheckError::MalformedLine`] for `path:line`.
pub(crate) fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> RankCheckError {
    RankCheckError::MalformedLine {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

/// Parse a line of exactly two whitespace-separated values.
pub(crate) fn parse_pair<T>(text: &str, path: &Path, line: usize) -> Result<(T, T)>
where
    T: FromStr,
    T::Err: Display,
{
    let mut fields = text.split_whitespace();
    let (Some(first), Some(second), None) = (fields.next(), fields.next(), fields.next()) else {
        let found = text.split_whitespace().count();
        return Err(malformed(
            path,
            line,
            format!("expected 2 fields, found {}", found),
        ));
    };
    Ok((
        parse_field(first, path, line)?,
        parse_field(second, path, line)?,
    ))
}

/// Parse a line holding exactly one value.
pub(crate) fn parse_single<T>(text: &str, path: &Path, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_field(text.trim(), path, line)
}

pub(crate) fn parse_field<T>(field: &str, path: &Path, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    field
        .parse()
        .map_err(|err| malformed(path, line, format!("invalid value '{}': {}", field, err)))
}
