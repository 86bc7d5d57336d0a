//! Graph store: a general-purpose directed graph over vertices `0..V`.
//!
//! - **Store** ([`Digraph`]): adjacency backed by `petgraph`, immutable once handed
//!   to a [`sap::SapEngine`]
//! - **Traversal** ([`traverse`]): multi-source BFS producing per-query distance tables
//! - **Validation** ([`validate`]): cycle and root checks for rooted DAGs
//! - **SAP engine** ([`sap`]): shortest ancestral path queries
//!
//! The store itself accepts any digraph, cycles included. Only the WordNet index
//! insists on a rooted DAG.

pub mod sap;
pub mod traverse;
pub mod validate;

use std::fmt;
use std::path::Path;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::GraphError;

/// Result type for graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Largest vertex count petgraph's `u32` node index can address.
pub const MAX_VERTICES: usize = u32::MAX as usize - 1;

/// Directed graph with vertices `0..V` and set-semantics adjacency.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    graph: DiGraph<(), ()>,
}

impl Digraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// Panics past [`MAX_VERTICES`]; untrusted counts go through
    /// [`Digraph::parse`], which rejects them first.
    pub fn new(vertex_count: usize) -> Self {
        let mut graph = DiGraph::new();
        for _ in 0..vertex_count {
            graph.add_node(());
        }
        Self { graph }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check that `v` names a vertex of this graph.
    pub fn validate_vertex(&self, v: usize) -> GraphResult<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: i64::try_from(v).unwrap_or(i64::MAX),
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Convert an untrusted integer into a vertex id, rejecting negatives and
    /// ids past the end.
    pub fn vertex(&self, raw: i64) -> GraphResult<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|&v| v < self.vertex_count())
            .ok_or(GraphError::VertexOutOfRange {
                vertex: raw,
                vertex_count: self.vertex_count(),
            })
    }

    /// Add the edge `v -> w`. Adding an existing edge again is a no-op.
    pub fn add_edge(&mut self, v: usize, w: usize) -> GraphResult<()> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.graph
            .update_edge(NodeIndex::new(v), NodeIndex::new(w), ());
        Ok(())
    }

    /// Vertices `v` points to (its hypernyms, in WordNet terms).
    ///
    /// Yields nothing for ids outside the graph.
    pub fn parents(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let neighbors = (v < self.vertex_count())
            .then(|| self.graph.neighbors_directed(NodeIndex::new(v), Direction::Outgoing));
        neighbors.into_iter().flatten().map(|n| n.index())
    }

    /// Number of outgoing edges of `v`.
    pub fn outdegree(&self, v: usize) -> usize {
        self.parents(v).count()
    }

    /// Number of incoming edges of `v`.
    pub fn indegree(&self, v: usize) -> usize {
        if v >= self.vertex_count() {
            return 0;
        }
        self.graph
            .neighbors_directed(NodeIndex::new(v), Direction::Incoming)
            .count()
    }

    /// Parse the whitespace-separated digraph text format:
    /// vertex count, edge count, then that many `v w` pairs.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let mut tokens = text.split_whitespace();

        let vertex_count = next_count(&mut tokens, "vertex count")?;
        let edge_count = next_count(&mut tokens, "edge count")?;
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::Malformed {
                message: format!(
                    "vertex count {vertex_count} exceeds the maximum of {MAX_VERTICES}"
                ),
            });
        }

        let mut graph = Self::new(vertex_count);
        for i in 0..edge_count {
            let v = next_vertex(&mut tokens, &graph, i)?;
            let w = next_vertex(&mut tokens, &graph, i)?;
            graph.add_edge(v, w)?;
        }

        if let Some(extra) = tokens.next() {
            return Err(GraphError::Malformed {
                message: format!("unexpected token \"{extra}\" after {edge_count} edges"),
            });
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "parsed digraph"
        );
        Ok(graph)
    }

    /// Read and parse a digraph file.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GraphError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&text)
    }

    pub(crate) fn petgraph(&self) -> &DiGraph<(), ()> {
        &self.graph
    }
}

fn next_count<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> GraphResult<usize> {
    let token = tokens.next().ok_or_else(|| GraphError::Malformed {
        message: format!("missing {what}"),
    })?;
    token.parse().map_err(|_| GraphError::Malformed {
        message: format!("invalid {what} \"{token}\""),
    })
}

fn next_vertex<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    graph: &Digraph,
    edge: usize,
) -> GraphResult<usize> {
    let token = tokens.next().ok_or_else(|| GraphError::Malformed {
        message: format!("edge list ends early at edge {edge}"),
    })?;
    let raw: i64 = token.parse().map_err(|_| GraphError::Malformed {
        message: format!("invalid vertex \"{token}\" in edge {edge}"),
    })?;
    graph.vertex(raw)
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for v in 0..self.vertex_count() {
            let mut parents: Vec<usize> = self.parents(v).collect();
            parents.sort_unstable();
            write!(f, "{v}:")?;
            for p in parents {
                write!(f, " {p}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
