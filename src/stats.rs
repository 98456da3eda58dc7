//! Timing statistics over repeated search runs.

use std::fmt;
use std::time::Duration;

/// Elapsed-time summary of several runs.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hamiltonian_search::RunStats;
///
/// let stats = RunStats::from_durations(&[
///     Duration::from_millis(2),
///     Duration::from_millis(4),
/// ])
/// .unwrap();
/// assert_eq!(stats.mean, Duration::from_millis(3));
/// assert!(RunStats::from_durations(&[]).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Number of runs summarized.
    pub runs: usize,
    /// Average elapsed time.
    pub mean: Duration,
    /// Fastest run.
    pub min: Duration,
    /// Slowest run.
    pub max: Duration,
}

impl RunStats {
    /// Summarizes `durations`; `None` when there are none.
    pub fn from_durations(durations: &[Duration]) -> Option<Self> {
        let min = *durations.iter().min()?;
        let max = *durations.iter().max()?;
        let total: Duration = durations.iter().sum();
        let runs = durations.len();
        Some(Self {
            runs,
            mean: total / runs as u32,
            min,
            max,
        })
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average elapsed time: {:.3} ms", millis(self.mean))?;
        writeln!(f, "Minimum elapsed time: {:.3} ms", millis(self.min))?;
        write!(f, "Maximum elapsed time: {:.3} ms", millis(self.max))
    }
}
