//! Shortest ancestral path (SAP) queries.
//!
//! An ancestral path between `v` and `w` is a directed path from `v` to a
//! common ancestor `x` together with a directed path from `w` to the same `x`.
//! The engine answers with the shortest such pair, using two independent BFS
//! passes and one linear scan over all vertices.
//!
//! Ties between equally short ancestors resolve to the lowest vertex id.

use serde::{Deserialize, Serialize};

use super::traverse::{DistanceTable, bfs_from, validate_sources};
use super::{Digraph, GraphResult};

/// A common ancestor together with the total length of the ancestral path
/// through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestralPath {
    pub ancestor: usize,
    pub length: usize,
}

/// SAP query engine over an owned copy of a digraph.
///
/// The engine never mutates its graph, so it is `Send + Sync` and can serve
/// queries from several threads at once.
#[derive(Debug, Clone)]
pub struct SapEngine {
    graph: Digraph,
}

impl SapEngine {
    /// Build an engine over a private copy of `graph`. Later changes to the
    /// caller's graph do not affect query results.
    pub fn new(graph: &Digraph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }

    /// Build an engine that takes ownership of `graph`.
    pub fn from_graph(graph: Digraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Length of the shortest ancestral path between `v` and `w`, `None` if
    /// they share no ancestor.
    pub fn length(&self, v: usize, w: usize) -> GraphResult<Option<usize>> {
        Ok(self.query(v, w)?.map(|p| p.length))
    }

    /// A common ancestor on a shortest ancestral path between `v` and `w`.
    pub fn ancestor(&self, v: usize, w: usize) -> GraphResult<Option<usize>> {
        Ok(self.query(v, w)?.map(|p| p.ancestor))
    }

    /// Shortest ancestral path between any vertex of `v` and any vertex of `w`.
    pub fn length_sets<I, J>(&self, v: I, w: J) -> GraphResult<Option<usize>>
    where
        I: IntoIterator<Item = usize>,
        J: IntoIterator<Item = usize>,
    {
        Ok(self.query_sets(v, w)?.map(|p| p.length))
    }

    /// Common ancestor on a shortest ancestral path between the two sets.
    pub fn ancestor_sets<I, J>(&self, v: I, w: J) -> GraphResult<Option<usize>>
    where
        I: IntoIterator<Item = usize>,
        J: IntoIterator<Item = usize>,
    {
        Ok(self.query_sets(v, w)?.map(|p| p.ancestor))
    }

    /// Ancestor and length together, from a single pair of BFS passes.
    pub fn query(&self, v: usize, w: usize) -> GraphResult<Option<AncestralPath>> {
        self.query_sets([v], [w])
    }

    /// Set form of [`SapEngine::query`]. Both sets are validated before
    /// either search runs.
    pub fn query_sets<I, J>(&self, v: I, w: J) -> GraphResult<Option<AncestralPath>>
    where
        I: IntoIterator<Item = usize>,
        J: IntoIterator<Item = usize>,
    {
        let v: Vec<usize> = v.into_iter().collect();
        let w: Vec<usize> = w.into_iter().collect();
        validate_sources(&self.graph, &v)?;
        validate_sources(&self.graph, &w)?;

        let from_v = bfs_from(&self.graph, &v);
        let from_w = bfs_from(&self.graph, &w);
        let path = shortest_common(&from_v, &from_w);

        tracing::debug!(
            sources_v = v.len(),
            sources_w = w.len(),
            ?path,
            "ancestral query"
        );
        Ok(path)
    }
}

/// Scan both tables in vertex order for the smallest combined distance.
/// Only a strictly smaller total replaces the current best.
fn shortest_common(a: &DistanceTable, b: &DistanceTable) -> Option<AncestralPath> {
    let mut best: Option<AncestralPath> = None;
    for (x, da) in a.reachable() {
        let Some(db) = b.dist_to(x) else {
            continue;
        };
        let length = da + db;
        if best.is_none_or(|p| length < p.length) {
            best = Some(AncestralPath {
                ancestor: x,
                length,
            });
        }
    }
    best
}
