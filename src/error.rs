//! Error types for graph construction and search configuration.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Caller-input errors.
///
/// Every variant describes an invalid configuration supplied by the caller.
/// A search that finds no Hamiltonian path is *not* an error; it is reported
/// through [`SearchResult`](crate::SearchResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The per-node edge cap must be strictly below the node count.
    #[error("number of edges must be less than the number of nodes: max_edges {max_edges} >= size {size}")]
    TooManyEdges {
        /// Requested per-node edge cap.
        max_edges: usize,
        /// Requested node count.
        size: usize,
    },

    /// A graph needs at least one node.
    #[error("graph must contain at least one node")]
    EmptyGraph,

    /// An adjacency list refers to a node position outside the graph.
    #[error("node {node} is out of range for a graph of {size} nodes")]
    NodeOutOfRange {
        /// Offending node position.
        node: usize,
        /// Node count of the graph.
        size: usize,
    },

    /// An adjacency list links a node to itself.
    #[error("node {node} cannot be linked to itself")]
    SelfLoop {
        /// Offending node position.
        node: usize,
    },

    /// More adjacency lists were supplied than there are nodes.
    #[error("{lists} adjacency lists supplied for a graph of {size} nodes")]
    TooManyAdjacencyLists {
        /// Number of lists supplied.
        lists: usize,
        /// Node count of the graph.
        size: usize,
    },

    /// A selection strategy was invoked with no candidate nodes at all.
    #[error("candidate list is empty")]
    EmptyCandidates,
}

impl Error {
    /// Whether this error stems from invalid caller configuration.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Error::TooManyEdges { .. }
                | Error::EmptyGraph
                | Error::NodeOutOfRange { .. }
                | Error::SelfLoop { .. }
                | Error::TooManyAdjacencyLists { .. }
                | Error::EmptyCandidates
        )
    }
}
