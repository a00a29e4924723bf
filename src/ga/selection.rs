//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! Selection draws from the normalized weights of the current generation.
//! The distribution may be degenerate: when every board has fitness 0 all
//! weights are zero, and the draw falls back to a uniform choice.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)

use crate::board::Board;
use rand::Rng;

/// Draws one index with probability proportional to `weights[i]`.
///
/// Weights need not sum to 1. If their sum is zero, negative or not finite,
/// every index is equally likely.
///
/// # Complexity
/// O(n) per draw (linear scan)
///
/// # Panics
/// Panics if `weights` is empty.
pub fn weighted_index<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot select from empty population");

    let n = weights.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            cumulative += w;
            if cumulative > threshold {
                return i;
            }
        }
    }

    // Rounding can leave `cumulative` a hair below `threshold`; land on the
    // last index that carries weight.
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(n - 1)
}

/// Draws two parents independently, with replacement.
///
/// The same board may be drawn twice.
///
/// # Panics
/// Panics if `population` is empty or `weights` has a different length.
pub fn select_parents<R: Rng>(population: &[Board], weights: &[f64], rng: &mut R) -> (Board, Board) {
    assert_eq!(
        population.len(),
        weights.len(),
        "population and weights must have equal length"
    );
    let first = weighted_index(weights, rng);
    let second = weighted_index(weights, rng);
    (population[first], population[second])
}
