//! Random graph generation parameters.

use crate::error::{Error, Result};

/// Configuration for random graph generation.
///
/// # Examples
///
/// ```
/// use hamiltonian_search::graph::GraphConfig;
///
/// let config = GraphConfig::new(12)
///     .with_max_edges(4)
///     .with_seed(42);
/// assert_eq!(config.size, 12);
/// assert_eq!(config.max_edges, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Number of nodes.
    pub size: usize,
    /// Upper bound for each node's randomly drawn edge budget.
    /// Must be strictly less than `size`.
    pub max_edges: usize,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            size: 20,
            max_edges: 5,
            seed: None,
        }
    }
}

impl GraphConfig {
    /// Creates a configuration for `size` nodes with `max_edges = size / 2`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_edges: size / 2,
            seed: None,
        }
    }

    /// Sets the node count.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the per-node edge cap.
    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.max_edges = max_edges;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_edges >= self.size {
            return Err(Error::TooManyEdges {
                max_edges: self.max_edges,
                size: self.size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.size, 20);
        assert_eq!(config.max_edges, 5);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_halves_size() {
        assert_eq!(GraphConfig::new(10).max_edges, 5);
        assert_eq!(GraphConfig::new(7).max_edges, 3);
        assert_eq!(GraphConfig::new(1).max_edges, 0);
    }

    #[test]
    fn test_validate_rejects_max_edges_at_size() {
        let config = GraphConfig::new(4).with_max_edges(4);
        assert_eq!(
            config.validate(),
            Err(Error::TooManyEdges {
                max_edges: 4,
                size: 4
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_graph() {
        assert!(GraphConfig::new(0).validate().is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = GraphConfig::default()
            .with_size(30)
            .with_max_edges(8)
            .with_seed(123);
        assert_eq!(config.size, 30);
        assert_eq!(config.max_edges, 8);
        assert_eq!(config.seed, Some(123));
    }
}
