//! Graph normalization: arbitrary node identifiers to dense zero-based indices
//!
//! Raw graph files may use sparse, non-contiguous node identifiers. The
//! normalizer scans the file once, interns every identifier it meets into an
//! [`IdentifierMapping`] (first appearance wins the lowest index), buffers the
//! translated edges, and writes them back out as a canonical edge list with a
//! `<nodes>\t<edges>` header.

mod lines;

pub use lines::{classify, LineClass, Section, COMMENT_MARKER, SECTION_MARKER};

use crate::error::{RankCheckError, Result};
use crate::input;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Bijection between original node identifiers and dense indices `0..N`.
///
/// Indices are assigned in first-appearance order: the first identifier
/// interned maps to 0, the next new one to 1, and so on. The mapping is
/// append-only; an identifier keeps the index it was first given.
#[derive(Debug, Clone, Default)]
pub struct IdentifierMapping {
    dense: HashMap<u64, usize>,
    original: Vec<u64>,
}

impl IdentifierMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense index for `id`, assigning the next free index on first sight.
    pub fn intern(&mut self, id: u64) -> usize {
        match self.dense.entry(id) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let index = self.original.len();
                entry.insert(index);
                self.original.push(id);
                index
            }
        }
    }

    /// Dense index previously assigned to `id`, if any.
    pub fn dense_index(&self, id: u64) -> Option<usize> {
        self.dense.get(&id).copied()
    }

    /// Original identifier behind a dense index.
    pub fn original_id(&self, index: usize) -> Option<u64> {
        self.original.get(index).copied()
    }

    /// Largest original identifier interned so far.
    pub fn max_original_id(&self) -> Option<u64> {
        self.original.iter().copied().max()
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

/// What a normalization run did, for reporting.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NormalizeSummary {
    /// Distinct node identifiers found (the dense node count).
    pub nodes: usize,
    /// Edge lines translated.
    pub edges: usize,
    /// Largest identifier in the input, before remapping.
    pub max_identifier: u64,
    /// Where the canonical graph was written.
    pub output_path: PathBuf,
}

/// Output path used when the caller does not name one: the input path with
/// `_out` appended to the file stem (`graph.txt` becomes `graph_out.txt`).
pub fn derived_output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(|| OsString::from("graph"));
    name.push("_out");
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }
    input.with_file_name(name)
}

/// Normalize a raw graph file into a canonical edge list at `output`.
///
/// The input is read in a single pass; translated edges are buffered in
/// memory and written together with the header once the whole file has
/// parsed, so a malformed input never leaves a partial output behind. The
/// input file is never modified.
pub fn normalize(input: &Path, output: &Path) -> Result<NormalizeSummary> {
    let (mapping, edges) = scan_edges(input)?;

    let Some(max_identifier) = mapping.max_original_id() else {
        return Err(RankCheckError::EmptyGraph(input.to_path_buf()));
    };

    write_canonical(output, mapping.len(), &edges)?;
    tracing::info!(
        "normalized {:?}: {} nodes, {} edges -> {:?}",
        input,
        mapping.len(),
        edges.len(),
        output
    );

    Ok(NormalizeSummary {
        nodes: mapping.len(),
        edges: edges.len(),
        max_identifier,
        output_path: output.to_path_buf(),
    })
}

/// Single scan over the raw file: classify every line, intern the endpoints
/// of edge lines, and collect the translated pairs in encounter order.
fn scan_edges(path: &Path) -> Result<(IdentifierMapping, Vec<(usize, usize)>)> {
    let reader = input::open_buffered(path)?;
    let mut mapping = IdentifierMapping::new();
    let mut edges = Vec::new();
    let mut section = Section::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let (next, class) = classify(&line, section);
        section = next;
        if class != LineClass::Edge {
            continue;
        }
        let (from, to): (u64, u64) = input::parse_pair(&line, path, index + 1)?;
        let from = mapping.intern(from);
        let to = mapping.intern(to);
        edges.push((from, to));
    }

    tracing::debug!(
        "scanned {:?}: {} distinct nodes, {} edge lines",
        path,
        mapping.len(),
        edges.len()
    );
    Ok((mapping, edges))
}

fn write_canonical(path: &Path, nodes: usize, edges: &[(usize, usize)]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}\t{}", nodes, edges.len())?;
    for (from, to) in edges {
        writeln!(out, "{}\t{}", from, to)?;
    }
    out.flush()?;
    Ok(())
}
