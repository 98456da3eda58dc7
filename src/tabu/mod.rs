//! Tabu Search (TS) for Hamiltonian paths.
//!
//! A single-solution local search: the candidate path is cut at a random
//! point and regrown with a pluggable [`SelectionStrategy`]. Tried moves are
//! remembered in a [`TabuList`] for the rest of the call so they are not
//! retried, and only strictly longer paths replace the candidate.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;
mod strategy;

pub use config::TabuConfig;
pub use list::{encode, TabuList, TabuMatching};
pub use runner::TabuRunner;
pub use strategy::SelectionStrategy;
