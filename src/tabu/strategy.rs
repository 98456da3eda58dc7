//! Neighbor-selection strategies for branch construction.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::greedy::max_degree_node;

/// Picks the next node of a tabu branch.
///
/// Given the neighbors of the branch tail (`candidates`) and the nodes that
/// may not be used (`excluded`), returns the next node or `None` when the
/// branch cannot be extended.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use hamiltonian_search::Graph;
/// use hamiltonian_search::tabu::SelectionStrategy;
///
/// let graph = Graph::from_adjacency(4, &[vec![1usize, 2, 3], vec![2]]).unwrap();
/// let mut rng = rand::rng();
/// let excluded: HashSet<usize> = [0].into_iter().collect();
///
/// // Node 1 and 2 have degree 2, node 3 has degree 1; ties keep the first.
/// let next = SelectionStrategy::Greedy
///     .select(&graph, &[1, 2, 3], &excluded, &mut rng)
///     .unwrap();
/// assert_eq!(next, Some(1));
///
/// assert!(SelectionStrategy::Random.select(&graph, &[], &excluded, &mut rng).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionStrategy {
    /// Highest-degree candidate that is not excluded.
    ///
    /// Ties keep the earliest candidate.
    #[default]
    Greedy,

    /// Uniformly random candidate that is not excluded.
    ///
    /// Draws without replacement until an admissible candidate turns up.
    Random,
}

impl SelectionStrategy {
    /// Selects the next node.
    ///
    /// Fails with [`Error::EmptyCandidates`] when `candidates` is empty.
    /// Returns `Ok(None)` when every candidate is excluded.
    pub fn select<R: Rng>(
        &self,
        graph: &Graph,
        candidates: &[usize],
        excluded: &HashSet<usize>,
        rng: &mut R,
    ) -> Result<Option<usize>> {
        if candidates.is_empty() {
            return Err(Error::EmptyCandidates);
        }
        Ok(match self {
            SelectionStrategy::Greedy => max_degree_node(graph, candidates, excluded),
            SelectionStrategy::Random => random_node(candidates, excluded, rng),
        })
    }
}

fn random_node<R: Rng>(
    candidates: &[usize],
    excluded: &HashSet<usize>,
    rng: &mut R,
) -> Option<usize> {
    let mut pool = candidates.to_vec();
    while !pool.is_empty() {
        let index = rng.random_range(0..pool.len());
        let node = pool.swap_remove(index);
        if !excluded.contains(&node) {
            return Some(node);
        }
    }
    None
}
