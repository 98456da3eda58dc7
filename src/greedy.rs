//! Greedy path constructor.
//!
//! Starts at the highest-degree node and keeps extending to the unvisited
//! neighbor of the path tail with the highest degree. Never backtracks, so
//! the result can be shorter than the graph; it seeds tabu search.

use std::collections::HashSet;

use crate::graph::Graph;

/// Returns the highest-degree position in `candidates` not in `excluded`.
///
/// Ties keep the earliest candidate. Returns `None` when every candidate is
/// excluded or there are none.
pub(crate) fn max_degree_node(
    graph: &Graph,
    candidates: &[usize],
    excluded: &HashSet<usize>,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for &position in candidates {
        if excluded.contains(&position) {
            continue;
        }
        best = match best {
            Some(b) if graph.degree(b) >= graph.degree(position) => Some(b),
            _ => Some(position),
        };
    }
    best
}

/// Builds a single candidate path greedily by degree.
///
/// # Examples
///
/// ```
/// use hamiltonian_search::{greedy_path, Graph};
///
/// // 0-1-2-3 line plus chord 1-3: node 1 has the highest degree.
/// let graph = Graph::from_adjacency(4, &[vec![1usize], vec![2, 3], vec![3]]).unwrap();
/// assert_eq!(greedy_path(&graph), vec![1, 2, 3]);
/// ```
pub fn greedy_path(graph: &Graph) -> Vec<usize> {
    let all: Vec<usize> = (0..graph.size()).collect();
    let mut visited = HashSet::new();

    let Some(root) = max_degree_node(graph, &all, &visited) else {
        return Vec::new();
    };
    let mut path = vec![root];
    visited.insert(root);

    while path.len() < graph.size() {
        let tail = path[path.len() - 1];
        match max_degree_node(graph, &graph.neighbors(tail), &visited) {
            Some(next) => {
                path.push(next);
                visited.insert(next);
            }
            None => break,
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphConfig;
    use proptest::prelude::*;

    #[test]
    fn test_ties_keep_earliest() {
        let graph = Graph::from_adjacency(4, &[vec![1usize], vec![], vec![3]]).unwrap();
        let none = HashSet::new();
        // All degrees are 1.
        assert_eq!(max_degree_node(&graph, &[0, 1, 2, 3], &none), Some(0));
        assert_eq!(max_degree_node(&graph, &[3, 2, 1, 0], &none), Some(3));
    }

    #[test]
    fn test_strictly_greater_wins() {
        let graph = Graph::from_adjacency(4, &[vec![1usize], vec![2, 3]]).unwrap();
        let none = HashSet::new();
        assert_eq!(max_degree_node(&graph, &[0, 1, 2], &none), Some(1));
    }

    #[test]
    fn test_excluded_and_empty() {
        let graph = Graph::from_adjacency(3, &[vec![1usize, 2]]).unwrap();
        let excluded: HashSet<usize> = [0, 1, 2].into_iter().collect();
        assert_eq!(max_degree_node(&graph, &[0, 1, 2], &excluded), None);
        assert_eq!(max_degree_node(&graph, &[], &HashSet::new()), None);
    }

    #[test]
    fn test_greedy_on_cycle_spans_graph() {
        let graph =
            Graph::from_adjacency(5, &[[1usize, 4], [0, 2], [1, 3], [2, 4], [3, 0]]).unwrap();
        let path = greedy_path(&graph);
        assert_eq!(path, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_greedy_stops_at_dead_end() {
        // Star: center 0, leaves 1..=3. Greedy goes 0 -> 1 and stops.
        let graph = Graph::from_adjacency(4, &[vec![1usize, 2, 3]]).unwrap();
        assert_eq!(greedy_path(&graph), vec![0, 1]);
    }

    #[test]
    fn test_greedy_on_edgeless_graph() {
        let graph = Graph::from_adjacency::<Vec<usize>>(3, &[]).unwrap();
        assert_eq!(greedy_path(&graph), vec![0]);
    }

    proptest! {
        #[test]
        fn prop_greedy_path_is_simple_and_connected(
            size in 2usize..30,
            seed in any::<u64>(),
        ) {
            let graph = Graph::random(&GraphConfig::new(size).with_seed(seed)).unwrap();
            let path = greedy_path(&graph);

            prop_assert!(!path.is_empty());
            let unique: HashSet<usize> = path.iter().copied().collect();
            prop_assert_eq!(unique.len(), path.len());
            for w in path.windows(2) {
                prop_assert!(graph.is_linked(w[0], w[1]));
            }
        }
    }
}
