//! Population initialization.

use crate::board::Board;
use rand::Rng;

/// Generates `size` independent random boards.
///
/// Duplicates are allowed; no deduplication is performed.
pub fn generate_population<R: Rng>(size: usize, rng: &mut R) -> Vec<Board> {
    (0..size).map(|_| Board::random(rng)).collect()
}
