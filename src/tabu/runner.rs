//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Seed the candidate path with the greedy constructor
//! 2. While the budget lasts and the candidate is shorter than the graph:
//!    a. Pick a random split index `r` in the candidate
//!    b. Exclude the prefix `candidate[..=r]` and grow a new branch from
//!    `candidate[r]` with the selection strategy until it returns `None`
//!    c. Skip the iteration if the move is tabu
//!    d. Neighbor solution = `candidate[..r]` + branch. If it is longer,
//!    adopt it and make the old candidate tabu; otherwise make the
//!    neighbor tabu
//! 3. Report the final candidate, perfect or approximate
//!
//! Tabu hits still consume an iteration. The candidate length never
//! decreases.

use std::collections::HashSet;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, trace};

use super::config::TabuConfig;
use super::list::{encode, TabuList, TabuMatching};
use crate::error::Result;
use crate::graph::Graph;
use crate::greedy::greedy_path;
use crate::outcome::{SearchResult, SearchStatus};
use crate::random::create_rng;

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on `graph`.
    ///
    /// Fails with [`Error::EmptyCandidates`](crate::Error::EmptyCandidates)
    /// only when a branch must start from a node with no edges at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamiltonian_search::{Graph, SearchStatus};
    /// use hamiltonian_search::tabu::{SelectionStrategy, TabuConfig, TabuRunner};
    ///
    /// let graph = Graph::from_adjacency(5, &[[1usize, 4], [0, 2], [1, 3], [2, 4], [3, 0]]).unwrap();
    /// let config = TabuConfig::default()
    ///     .with_strategy(SelectionStrategy::Random)
    ///     .with_seed(42);
    ///
    /// let result = TabuRunner::run(&graph, &config).unwrap();
    /// assert_eq!(result.status, SearchStatus::Found);
    /// assert_eq!(result.path_len(), 5);
    /// ```
    pub fn run(graph: &Graph, config: &TabuConfig) -> Result<SearchResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(graph, config, &mut rng)
    }

    /// Executes Tabu Search with the caller's RNG; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        graph: &Graph,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        let start = Instant::now();
        let size = graph.size();

        let mut candidate = greedy_path(graph);
        let mut tabu = TabuList::new(config.matching);
        let mut length_history = Vec::new();
        let mut iterations = 0;

        debug!(
            size,
            seed_len = candidate.len(),
            strategy = ?config.strategy,
            "starting tabu search"
        );

        while iterations < config.max_iterations && candidate.len() < size {
            iterations += 1;

            let split = rng.random_range(0..candidate.len());
            let source = candidate[split];
            let mut excluded: HashSet<usize> = candidate[..=split].iter().copied().collect();

            let mut branch = vec![source];
            let mut next = config
                .strategy
                .select(graph, &graph.neighbors(source), &excluded, rng)?;
            while let Some(node) = next {
                branch.push(node);
                excluded.insert(node);
                next = config
                    .strategy
                    .select(graph, &graph.neighbors(node), &excluded, rng)?;
            }

            let mut neighbor = candidate[..split].to_vec();
            neighbor.extend_from_slice(&branch);

            let move_key = match tabu.matching() {
                TabuMatching::Substring => encode(&branch),
                TabuMatching::Exact => encode(&neighbor),
            };
            if tabu.is_forbidden(&move_key) {
                trace!(iteration = iterations, split, "move is tabu");
                length_history.push(candidate.len());
                continue;
            }

            if neighbor.len() > candidate.len() {
                trace!(
                    iteration = iterations,
                    from = candidate.len(),
                    to = neighbor.len(),
                    "accepted longer neighbor"
                );
                tabu.insert(encode(&candidate));
                candidate = neighbor;
            } else {
                trace!(iteration = iterations, len = neighbor.len(), "rejected neighbor");
                tabu.insert(encode(&neighbor));
            }
            length_history.push(candidate.len());
        }

        let (status, summary) = if candidate.len() == size {
            (SearchStatus::Found, "Best solution is found")
        } else {
            (
                SearchStatus::Approximate,
                "No perfect solution found, best approximate alternate solution obtained",
            )
        };

        debug!(
            iterations,
            len = candidate.len(),
            tabu_entries = tabu.len(),
            "tabu search finished"
        );

        Ok(SearchResult {
            solution: Some(candidate),
            elapsed: start.elapsed(),
            message: Some(format!("{summary} after {iterations} iterations")),
            status,
            iterations,
            length_history,
        })
    }
}
