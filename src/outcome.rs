//! The value every search returns.

use std::fmt;
use std::time::Duration;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// A Hamiltonian path was found.
    Found,
    /// Exhaustive search covered every root without finding a path.
    NotFound,
    /// Exhaustive search stopped at a root with no edges.
    IsolatedNode,
    /// Tabu search used its budget without reaching full length.
    Approximate,
}

/// Output of one search invocation.
///
/// Produced fresh per call. `solution` holds node positions in path order;
/// it is `None` when the search certifies nothing (exhaustive search that
/// found no path). Tabu search always reports its best candidate, which may
/// be shorter than the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The found path, if any.
    pub solution: Option<Vec<usize>>,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
    /// Human-readable outcome description.
    pub message: Option<String>,
    /// Outcome classification.
    pub status: SearchStatus,
    /// Loop iterations consumed (tabu search only; 0 otherwise).
    pub iterations: usize,
    /// Candidate length after each tabu iteration (empty for exhaustive).
    pub length_history: Vec<usize>,
}

impl SearchResult {
    pub(crate) fn found(path: Vec<usize>, elapsed: Duration) -> Self {
        Self {
            solution: Some(path),
            elapsed,
            message: None,
            status: SearchStatus::Found,
            iterations: 0,
            length_history: Vec::new(),
        }
    }

    pub(crate) fn not_found(elapsed: Duration) -> Self {
        Self {
            solution: None,
            elapsed,
            message: None,
            status: SearchStatus::NotFound,
            iterations: 0,
            length_history: Vec::new(),
        }
    }

    pub(crate) fn isolated_node(elapsed: Duration) -> Self {
        Self {
            solution: None,
            elapsed,
            message: Some("A node has 0 edges, therefore no Hamiltonian path".to_string()),
            status: SearchStatus::IsolatedNode,
            iterations: 0,
            length_history: Vec::new(),
        }
    }

    /// Whether the search produced a path spanning the whole graph.
    pub fn is_perfect(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Length of the reported path (0 when there is none).
    pub fn path_len(&self) -> usize {
        self.solution.as_ref().map_or(0, Vec::len)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.solution {
            Some(path) => {
                let positions: Vec<String> = path.iter().map(|p| p.to_string()).collect();
                writeln!(f, "A solution is found in this graph:")?;
                writeln!(f, "{}", positions.join(", "))?;
                writeln!(f, "Path length: {}", path.len())?;
            }
            None => writeln!(f, "No solutions found in this graph")?,
        }
        writeln!(f, "{}", self.message.as_deref().unwrap_or(""))?;
        write!(f, "Elapsed time: {} ms", self.elapsed.as_millis())
    }
}
