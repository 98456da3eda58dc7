//! Entry point binding the search algorithms to one graph.

use crate::error::Result;
use crate::exhaustive::ExhaustiveRunner;
use crate::graph::Graph;
use crate::greedy::greedy_path;
use crate::outcome::SearchResult;
use crate::tabu::{SelectionStrategy, TabuConfig, TabuRunner};

/// Runs searches against a borrowed, read-only graph.
///
/// Each call is independent; nothing carries over between calls except the
/// graph itself.
///
/// # Examples
///
/// ```
/// use hamiltonian_search::{Graph, Solver};
///
/// let graph = Graph::from_adjacency(5, &[[1usize, 4], [0, 2], [1, 3], [2, 4], [3, 0]]).unwrap();
/// let solver = Solver::new(&graph).with_seed(7);
///
/// let exact = solver.exhaustive_search();
/// assert!(exact.is_perfect());
///
/// let approx = solver.random_tabu(100).unwrap();
/// assert_eq!(approx.path_len(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver<'g> {
    graph: &'g Graph,
    seed: Option<u64>,
}

impl<'g> Solver<'g> {
    /// Creates a solver for `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph, seed: None }
    }

    /// Fixes the seed used by the tabu shortcuts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The graph this solver searches.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Exhaustive DFS over every root.
    pub fn exhaustive_search(&self) -> SearchResult {
        ExhaustiveRunner::run(self.graph)
    }

    /// The greedy seed path.
    pub fn greedy_path(&self) -> Vec<usize> {
        greedy_path(self.graph)
    }

    /// Tabu search with greedy-by-degree branch growth.
    pub fn greedy_tabu(&self, iterations: usize) -> Result<SearchResult> {
        self.tabu(&self.tabu_config(iterations, SelectionStrategy::Greedy))
    }

    /// Tabu search with random branch growth.
    pub fn random_tabu(&self, iterations: usize) -> Result<SearchResult> {
        self.tabu(&self.tabu_config(iterations, SelectionStrategy::Random))
    }

    /// Tabu search with an explicit configuration.
    pub fn tabu(&self, config: &TabuConfig) -> Result<SearchResult> {
        TabuRunner::run(self.graph, config)
    }

    fn tabu_config(&self, iterations: usize, strategy: SelectionStrategy) -> TabuConfig {
        let config = TabuConfig::default()
            .with_max_iterations(iterations)
            .with_strategy(strategy);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphConfig;
    use crate::outcome::SearchStatus;

    #[test]
    fn test_shortcuts_bind_strategy_and_budget() {
        let graph = Graph::from_adjacency(4, &[vec![1usize, 2, 3]]).unwrap();
        let solver = Solver::new(&graph).with_seed(3);

        let greedy = solver.greedy_tabu(12).unwrap();
        assert_eq!(greedy.status, SearchStatus::Approximate);
        assert_eq!(greedy.iterations, 12);

        let random = solver.random_tabu(9).unwrap();
        assert_eq!(random.iterations, 9);
    }

    #[test]
    fn test_searches_share_graph_without_mutation() {
        let graph = Graph::random(&GraphConfig::new(10).with_seed(17)).unwrap();
        let before = graph.clone();
        let solver = Solver::new(&graph);

        let _ = solver.exhaustive_search();
        let _ = solver.greedy_tabu(50);
        let _ = solver.random_tabu(50);

        assert_eq!(solver.graph(), &before);
        assert_eq!(solver.greedy_path(), crate::greedy::greedy_path(&before));
    }

    #[test]
    fn test_exhaustive_and_tabu_agree_on_perfect_paths() {
        let graph = Graph::random(&GraphConfig::new(9).with_max_edges(4).with_seed(21)).unwrap();
        let solver = Solver::new(&graph).with_seed(21);

        let exact = solver.exhaustive_search();
        let tabu = solver.random_tabu(500).unwrap();
        if tabu.is_perfect() {
            assert!(exact.is_perfect(), "tabu found a path the exhaustive search missed");
            assert!(graph.is_hamiltonian_path(tabu.solution.as_deref().unwrap()));
        }
        if let Some(path) = exact.solution {
            assert!(graph.is_hamiltonian_path(&path));
        }
    }
}
