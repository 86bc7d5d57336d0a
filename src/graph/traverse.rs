//! Multi-source breadth-first search.
//!
//! Each call allocates its own [`DistanceTable`], so concurrent queries over a
//! shared [`Digraph`] never touch common mutable state.

use std::collections::VecDeque;

use crate::error::GraphError;

use super::{Digraph, GraphResult};

/// Shortest hop counts from a source set to every vertex of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    dist: Vec<Option<usize>>,
}

impl DistanceTable {
    /// Whether `v` is reachable from any source.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v).is_some()
    }

    /// Hop count from the nearest source to `v`, `None` if unreachable.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist.get(v).copied().flatten()
    }

    /// Number of vertices the table covers.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Reachable vertices with their distances, in vertex order.
    pub fn reachable(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|d| (v, d)))
    }
}

/// Validate a source set: non-empty, every id inside the graph.
pub fn validate_sources(graph: &Digraph, sources: &[usize]) -> GraphResult<()> {
    if sources.is_empty() {
        return Err(GraphError::EmptySources);
    }
    sources.iter().try_for_each(|&v| graph.validate_vertex(v))
}

/// Breadth-first search from every vertex in `sources` at once, following
/// edge direction.
///
/// A vertex's distance is the minimum over all sources. Sources sit at
/// distance 0; duplicates in `sources` are harmless.
pub fn multi_source_bfs<I>(graph: &Digraph, sources: I) -> GraphResult<DistanceTable>
where
    I: IntoIterator<Item = usize>,
{
    let sources: Vec<usize> = sources.into_iter().collect();
    validate_sources(graph, &sources)?;
    Ok(bfs_from(graph, &sources))
}

/// The search behind [`multi_source_bfs`], for callers that have already run
/// [`validate_sources`].
pub(crate) fn bfs_from(graph: &Digraph, sources: &[usize]) -> DistanceTable {
    let mut dist: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    for &s in sources {
        if dist[s].is_none() {
            dist[s] = Some(0);
            queue.push_back(s);
        }
    }

    while let Some(v) = queue.pop_front() {
        let next = dist[v].map_or(0, |d| d + 1);
        for w in graph.parents(v) {
            if dist[w].is_none() {
                dist[w] = Some(next);
                queue.push_back(w);
            }
        }
    }

    DistanceTable { dist }
}
