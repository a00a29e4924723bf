//! Fitness evaluation and normalization.
//!
//! Fitness is recomputed from scratch every generation; nothing here is
//! cached across generations.

use crate::board::Board;

/// Pairs each board with its fitness, preserving input order.
pub fn evaluate(population: &[Board]) -> Vec<(Board, u32)> {
    population.iter().map(|b| (*b, b.fitness())).collect()
}

/// Converts raw fitness values into selection probabilities.
///
/// Each value is divided by the total. When the total is zero every weight
/// is zero; selection treats that as a uniform distribution.
pub fn normalize(fitness: &[u32]) -> Vec<f64> {
    let total: u64 = fitness.iter().map(|&f| f as u64).sum();
    if total == 0 {
        return vec![0.0; fitness.len()];
    }
    let total = total as f64;
    fitness.iter().map(|&f| f as f64 / total).collect()
}

/// A population evaluated at the start of a generation.
///
/// Breeding for the generation reads only from this snapshot.
#[derive(Debug, Clone)]
pub struct Evaluation {
    boards: Vec<Board>,
    fitness: Vec<u32>,
    weights: Vec<f64>,
}

impl Evaluation {
    /// Scores `population` and derives its selection weights.
    pub fn new(population: Vec<Board>) -> Self {
        let fitness: Vec<u32> = population.iter().map(Board::fitness).collect();
        let weights = normalize(&fitness);
        Self {
            boards: population,
            fitness,
            weights,
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn fitness(&self) -> &[u32] {
        &self.fitness
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Mean fitness of the population, `0.0` when empty.
    pub fn average(&self) -> f64 {
        if self.fitness.is_empty() {
            return 0.0;
        }
        let total: u64 = self.fitness.iter().map(|&f| f as u64).sum();
        total as f64 / self.fitness.len() as f64
    }

    /// The first board holding the highest fitness, with that fitness.
    pub fn best(&self) -> Option<(Board, u32)> {
        let mut best: Option<(Board, u32)> = None;
        for (board, &fit) in self.boards.iter().zip(&self.fitness) {
            if best.map_or(true, |(_, b)| fit > b) {
                best = Some((*board, fit));
            }
        }
        best
    }
}
