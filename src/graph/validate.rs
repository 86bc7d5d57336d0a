//! Rooted-DAG checks: acyclicity and a unique out-degree-zero vertex.

use petgraph::algo::toposort;

use crate::error::GraphError;

use super::{Digraph, GraphResult};

/// Most roots reported in a [`GraphError::RootCount`].
const MAX_REPORTED_ROOTS: usize = 10;

/// A vertex on some directed cycle, or `None` for an acyclic graph.
/// Self-loops count as cycles.
pub fn find_cycle(graph: &Digraph) -> Option<usize> {
    toposort(graph.petgraph(), None)
        .err()
        .map(|cycle| cycle.node_id().index())
}

/// All vertices with out-degree zero, ascending.
pub fn roots(graph: &Digraph) -> Vec<usize> {
    (0..graph.vertex_count())
        .filter(|&v| graph.outdegree(v) == 0)
        .collect()
}

/// Check that `graph` is a rooted DAG and return its root.
pub fn ensure_rooted_dag(graph: &Digraph) -> GraphResult<usize> {
    if let Some(vertex) = find_cycle(graph) {
        return Err(GraphError::Cycle { vertex });
    }

    let roots = roots(graph);
    match roots.as_slice() {
        [root] => Ok(*root),
        _ => Err(GraphError::RootCount {
            count: roots.len(),
            roots: roots.into_iter().take(MAX_REPORTED_ROOTS).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn tree() -> Digraph {
        let mut g = Digraph::new(7);
        for (v, w) in [(1, 0), (2, 0), (3, 1), (4, 1), (5, 2), (6, 2)] {
            g.add_edge(v, w).unwrap();
        }
        g
    }

    #[test]
    fn tree_is_rooted_dag() {
        let g = tree();
        assert_eq!(find_cycle(&g), None);
        assert_eq!(roots(&g), vec![0]);
        assert_eq!(ensure_rooted_dag(&g).unwrap(), 0);
    }

    #[test]
    fn shared_parents_are_fine() {
        // 3 has two hypernyms that share a root: a DAG, not a tree.
        let mut g = Digraph::new(4);
        for (v, w) in [(1, 0), (2, 0), (3, 1), (3, 2)] {
            g.add_edge(v, w).unwrap();
        }
        assert_eq!(ensure_rooted_dag(&g).unwrap(), 0);
    }

    #[test]
    fn cycle_rejected() {
        let mut g = Digraph::new(4);
        for (v, w) in [(1, 0), (2, 3), (3, 2)] {
            g.add_edge(v, w).unwrap();
        }
        let vertex = find_cycle(&g).unwrap();
        assert!(vertex == 2 || vertex == 3);
        let err = ensure_rooted_dag(&g).unwrap_err();
        assert!(matches!(err, GraphError::Cycle { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
    }

    #[test]
    fn self_loop_rejected() {
        let mut g = Digraph::new(2);
        g.add_edge(1, 0).unwrap();
        g.add_edge(1, 1).unwrap();
        assert!(matches!(
            ensure_rooted_dag(&g),
            Err(GraphError::Cycle { vertex: 1 })
        ));
    }

    #[test]
    fn two_roots_rejected() {
        let mut g = Digraph::new(3);
        g.add_edge(2, 0).unwrap();
        let err = ensure_rooted_dag(&g).unwrap_err();
        match err {
            GraphError::RootCount { count, roots } => {
                assert_eq!(count, 2);
                assert_eq!(roots, vec![0, 1]);
            }
            other => panic!("expected RootCount, got {other:?}"),
        }
    }

    #[test]
    fn empty_graph_has_no_root() {
        let err = ensure_rooted_dag(&Digraph::new(0)).unwrap_err();
        assert!(matches!(err, GraphError::RootCount { count: 0, .. }));
    }

    #[test]
    fn reported_roots_are_capped() {
        let g = Digraph::new(50);
        match ensure_rooted_dag(&g).unwrap_err() {
            GraphError::RootCount { count, roots } => {
                assert_eq!(count, 50);
                assert_eq!(roots.len(), MAX_REPORTED_ROOTS);
            }
            other => panic!("expected RootCount, got {other:?}"),
        }
    }
}
