//! Canonical graph loading and PageRank reference scoring

mod pagerank;

pub use pagerank::{reference_scores, PageRankConfig, ScoreVector};

use crate::error::Result;
use crate::input;
use petgraph::graph::{DiGraph, NodeIndex};
use std::io::BufRead;
use std::path::Path;

/// Directed graph loaded from a canonical edge-list file.
///
/// Node indices run densely over `0..N` where N comes from the file header,
/// so index i in the graph corresponds to line i of a candidate score file.
/// Parallel edges and self-loops are kept as written.
#[derive(Debug, Clone)]
pub struct CanonicalGraph {
    graph: DiGraph<(), ()>,
    declared_edges: usize,
}

impl CanonicalGraph {
    /// Load a canonical edge-list file: a `<nodes>\t<edges>` header followed
    /// by one `<from>\t<to>` pair per line.
    ///
    /// The node count is taken from the header; the declared edge count is
    /// kept for reporting but the edges actually present decide the graph.
    /// An edge endpoint at or beyond the declared node count is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = input::open_buffered(path)?;
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(input::malformed(path, 1, "missing header")),
        };
        let (nodes, declared_edges): (usize, usize) = input::parse_pair(&header, path, 1)?;

        let mut graph = DiGraph::with_capacity(nodes, declared_edges);
        for _ in 0..nodes {
            graph.add_node(());
        }

        for (index, line) in lines.enumerate() {
            let line = line?;
            let line_no = index + 2;
            let (from, to): (usize, usize) = input::parse_pair(&line, path, line_no)?;
            for endpoint in [from, to] {
                if endpoint >= nodes {
                    return Err(input::malformed(
                        path,
                        line_no,
                        format!("edge endpoint {} out of range for {} nodes", endpoint, nodes),
                    ));
                }
            }
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }

        tracing::debug!(
            "loaded {:?}: {} nodes, {} edges ({} declared)",
            path,
            graph.node_count(),
            graph.edge_count(),
            declared_edges
        );
        Ok(Self {
            graph,
            declared_edges,
        })
    }

    /// Build a graph directly from dense-index edges.
    ///
    /// Panics if an endpoint is not below `nodes`; callers constructing
    /// graphs in code are expected to pass valid indices.
    pub fn from_edges(nodes: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = DiGraph::with_capacity(nodes, edges.len());
        for _ in 0..nodes {
            graph.add_node(());
        }
        for &(from, to) in edges {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        Self {
            graph,
            declared_edges: edges.len(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edge count claimed by the file header, which may differ from the
    /// edges actually present.
    pub fn declared_edge_count(&self) -> usize {
        self.declared_edges
    }

    pub(crate) fn petgraph(&self) -> &DiGraph<(), ()> {
        &self.graph
    }
}
