//! Hamiltonian-path search on randomly generated undirected graphs.
//!
//! Given a graph, find an ordering of all nodes in which consecutive nodes
//! are adjacent. Three searches are provided:
//!
//! - **Exhaustive search**: iterative depth-first search from every root.
//!   Certifies existence or absence of a path; exponential worst case.
//! - **Greedy constructor**: one pass that always extends to the
//!   highest-degree unvisited neighbor. A heuristic seed, not a solver.
//! - **Tabu search**: local search that cuts the candidate path at a random
//!   point, regrows it with a greedy or random strategy, and remembers tried
//!   moves. Bounded by an iteration budget.
//!
//! # Quick start
//!
//! ```
//! use hamiltonian_search::{Graph, GraphConfig, Solver};
//!
//! let graph = Graph::random(&GraphConfig::new(12).with_max_edges(4).with_seed(1)).unwrap();
//! let solver = Solver::new(&graph);
//!
//! let exact = solver.exhaustive_search();
//! let approx = solver.greedy_tabu(1000).unwrap();
//! assert!(approx.path_len() <= graph.size());
//! if let Some(path) = &exact.solution {
//!     assert!(graph.is_hamiltonian_path(path));
//! }
//! ```
//!
//! All searches treat the graph as read-only, so one graph can be searched
//! repeatedly or from several threads.

pub mod error;
pub mod exhaustive;
pub mod graph;
pub mod greedy;
pub mod outcome;
pub mod random;
pub mod solver;
pub mod stats;
pub mod tabu;

pub use error::{Error, Result};
pub use exhaustive::ExhaustiveRunner;
pub use graph::{Graph, GraphConfig, Node};
pub use greedy::greedy_path;
pub use outcome::{SearchResult, SearchStatus};
pub use solver::Solver;
pub use stats::RunStats;
