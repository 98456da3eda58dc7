//! RNG construction shared by graph generation and tabu search.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the crate's RNG.
///
/// A fixed `seed` gives reproducible graphs and search runs; `None` seeds
/// from the operating system.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
