//! Seeded random number generation.
//!
//! Every search draws from an explicit generator passed in by the caller;
//! nothing in this crate touches a process-wide random stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
///
/// Two generators built from the same seed yield identical streams, so a
/// pinned seed reproduces a whole run.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
