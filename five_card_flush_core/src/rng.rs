//! Random sources for shuffling.
//!
//! The deck never reaches for a global generator; callers pick one of these
//! (or any other `rand::Rng`) and pass it in. A seeded generator replays the
//! same shuffles, which is what tests and bug reports want.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Deterministic generator: the same seed always yields the same shuffles.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system, for real play.
pub fn from_entropy() -> StdRng {
    StdRng::from_os_rng()
}
