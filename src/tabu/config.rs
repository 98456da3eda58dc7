//! Tabu Search configuration.

use super::list::TabuMatching;
use super::strategy::SelectionStrategy;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use hamiltonian_search::tabu::{SelectionStrategy, TabuConfig, TabuMatching};
///
/// let config = TabuConfig::default()
///     .with_max_iterations(500)
///     .with_strategy(SelectionStrategy::Random)
///     .with_matching(TabuMatching::Exact);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.strategy, SelectionStrategy::Random);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Iteration budget. Zero returns the greedy seed unchanged.
    pub max_iterations: usize,
    /// How each branch picks its next node.
    pub strategy: SelectionStrategy,
    /// How moves are matched against the tabu list.
    pub matching: TabuMatching,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            strategy: SelectionStrategy::default(),
            matching: TabuMatching::default(),
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the neighbor-selection strategy.
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the tabu matching mode.
    pub fn with_matching(mut self, matching: TabuMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
