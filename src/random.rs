//! Random number generator construction.
//!
//! Every operation in this crate takes an explicit `&mut R: Rng` handle.
//! This module only decides where the single stream for a run comes from.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a 64-bit seed.
///
/// Two generators built from the same seed produce the same stream, which is
/// what makes seeded runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed, drawing a fresh seed when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
