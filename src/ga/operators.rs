//! Genetic operators on [`Board`]s.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point crossover with a cut in `1..BOARD_SIZE`,
//!   so both parents always contribute at least one column
//!
//! # Mutation
//!
//! - [`mutate`]: with probability `mutation_rate`, move the queen of one
//!   random column to a different row
//!
//! # Breeding
//!
//! - [`breed`]: select two parents, cross them, mutate each child
//!   independently

use super::selection::select_parents;
use crate::board::{Board, BOARD_SIZE};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut point uniformly from `1..BOARD_SIZE` and returns
/// [`splice`] at that point.
pub fn crossover<R: Rng>(parent1: &Board, parent2: &Board, rng: &mut R) -> (Board, Board) {
    let point = rng.random_range(1..BOARD_SIZE);
    splice(parent1, parent2, point)
}

/// Splices two parents at `point`.
///
/// `child1 = parent1[..point] + parent2[point..]` and
/// `child2 = parent2[..point] + parent1[point..]`.
///
/// # Panics
/// Panics if `point > BOARD_SIZE`.
pub fn splice(parent1: &Board, parent2: &Board, point: usize) -> (Board, Board) {
    assert!(point <= BOARD_SIZE, "cut point {point} outside the board");

    let (p1, p2) = (parent1.rows(), parent2.rows());
    let mut c1 = *p1;
    let mut c2 = *p2;
    c1[point..].copy_from_slice(&p2[point..]);
    c2[point..].copy_from_slice(&p1[point..]);

    (Board::from_rows_unchecked(c1), Board::from_rows_unchecked(c2))
}

// ============================================================================
// Mutation
// ============================================================================

/// Mutates a copy of `board` with probability `mutation_rate`.
///
/// When the mutation fires, exactly one column changes and its new row
/// always differs from the old one. Otherwise the board is returned as is.
///
/// # Panics
/// Panics if `mutation_rate` is outside `[0, 1]`.
pub fn mutate<R: Rng>(board: &Board, mutation_rate: f64, rng: &mut R) -> Board {
    if !rng.random_bool(mutation_rate) {
        return *board;
    }

    let column = rng.random_range(0..BOARD_SIZE);
    let current = board[column];
    // 7 of 8 rows are accepted, so this terminates with probability 1.
    let mut row = rng.random_range(0..BOARD_SIZE);
    while row == current {
        row = rng.random_range(0..BOARD_SIZE);
    }
    board.with_row(column, row)
}

// ============================================================================
// Breeding
// ============================================================================

/// Produces two children from the evaluated population.
///
/// Select → crossover → mutate each child independently, so zero, one or
/// both children may end up mutated.
pub fn breed<R: Rng>(
    population: &[Board],
    weights: &[f64],
    mutation_rate: f64,
    rng: &mut R,
) -> (Board, Board) {
    let (parent1, parent2) = select_parents(population, weights, rng);
    let (child1, child2) = crossover(&parent1, &parent2, rng);
    (
        mutate(&child1, mutation_rate, rng),
        mutate(&child2, mutation_rate, rng),
    )
}

// ============================================================================
// Tests
// ============================================================================
