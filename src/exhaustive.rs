//! Exhaustive depth-first search for a Hamiltonian path.
//!
//! # Algorithm
//!
//! Every node is tried as the path root, in position order. For each root
//! an explicit DFS runs over two parallel stacks:
//!
//! - `path`: the nodes visited so far, root first;
//! - `remaining`: for each path entry, how many of its edges are untried.
//!
//! At each step, with `current` the last path node:
//!
//! 1. If `current` has untried edges, take the next one (edges are tried in
//!    neighbor order, index `degree - remaining`). Skip it if the neighbor
//!    is already on the path, otherwise push the neighbor.
//! 2. Else, if the path spans the graph, it is a Hamiltonian path.
//! 3. Else backtrack: pop `current` and its counter.
//!
//! A root is exhausted once its own entry is popped.
//!
//! If the root about to be searched has no edges at all, the whole search
//! stops and reports [`SearchStatus::IsolatedNode`](crate::SearchStatus);
//! later roots are not tried.
//!
//! Worst-case time is exponential in the node count.

use std::time::Instant;

use tracing::debug;

use crate::graph::Graph;
use crate::outcome::SearchResult;

/// Exhaustive search runner.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Searches `graph` for a Hamiltonian path.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamiltonian_search::{ExhaustiveRunner, Graph, SearchStatus};
    ///
    /// let graph = Graph::from_adjacency(4, &[vec![1usize], vec![2], vec![3]]).unwrap();
    /// let result = ExhaustiveRunner::run(&graph);
    ///
    /// assert_eq!(result.status, SearchStatus::Found);
    /// assert_eq!(result.solution, Some(vec![0, 1, 2, 3]));
    /// ```
    pub fn run(graph: &Graph) -> SearchResult {
        let start = Instant::now();
        let size = graph.size();
        let adjacency = graph.adjacency_lists();

        debug!(size, "starting exhaustive search");

        for root in 0..size {
            if adjacency[root].is_empty() {
                debug!(root, "root has no edges, aborting exhaustive search");
                return SearchResult::isolated_node(start.elapsed());
            }

            let mut path = Vec::with_capacity(size);
            let mut remaining = Vec::with_capacity(size);
            let mut on_path = vec![false; size];

            path.push(root);
            remaining.push(adjacency[root].len());
            on_path[root] = true;

            while let Some(&current) = path.last() {
                let top = remaining.len() - 1;
                if remaining[top] > 0 {
                    let edges = &adjacency[current];
                    let next = edges[edges.len() - remaining[top]];
                    remaining[top] -= 1;
                    if on_path[next] {
                        continue;
                    }
                    path.push(next);
                    remaining.push(adjacency[next].len());
                    on_path[next] = true;
                } else if path.len() == size {
                    debug!(root, "exhaustive search found a Hamiltonian path");
                    return SearchResult::found(path, start.elapsed());
                } else {
                    path.pop();
                    remaining.pop();
                    on_path[current] = false;
                }
            }
        }

        debug!("exhaustive search found no Hamiltonian path");
        SearchResult::not_found(start.elapsed())
    }
}
