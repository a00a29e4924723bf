//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! Each generation is fully synchronous. Breeding reads only from the
//! population evaluated at the start of the generation, and the next
//! population replaces it wholesale.

use super::config::GaConfig;
use super::evaluation::Evaluation;
use super::operators::breed;
use super::population::generate_population;
use crate::board::{Board, MAX_FITNESS};
use crate::error::Result;
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, info};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A board with no attacking pairs was found.
    Converged,
    /// The generation budget ran out first.
    Exhausted,
}

/// Fitness statistics of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Mean fitness of the generation's population.
    pub average: f64,

    /// Highest fitness in the generation's population.
    pub best: u32,

    /// Highest fitness seen in this or any earlier generation.
    pub best_so_far: u32,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The first board to reach the best fitness seen during the run.
    pub best: Board,

    /// Fitness of `best`.
    pub best_fitness: u32,

    /// One entry per completed generation, in order.
    pub history: Vec<GenerationStats>,

    /// Number of generations executed (equal to `history.len()`).
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,
}

impl GaResult {
    /// Whether the run found a board with no attacking pairs.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use queens_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.history.len(), result.generations);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG built from `config.seed`.
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration does not validate.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the stream.
    pub fn run_with_rng<R: Rng>(config: &GaConfig, rng: &mut R) -> Result<GaResult> {
        config.validate()?;

        let mut population = generate_population(config.population_size, rng);
        let mut best: Option<(Board, u32)> = None;
        let mut history = Vec::with_capacity(config.max_generations);

        for gen in 0..config.max_generations {
            // 1. Evaluate
            let evaluation = Evaluation::new(population);
            let average = evaluation.average();
            let (gen_best, gen_best_fitness) = evaluation
                .best()
                .expect("validated population is never empty");

            // 2. Track best-ever; ties keep the earlier board
            if best.map_or(true, |(_, f)| gen_best_fitness > f) {
                best = Some((gen_best, gen_best_fitness));
            }
            let (best_board, best_fitness) = best.expect("set on the first generation");

            history.push(GenerationStats {
                average,
                best: gen_best_fitness,
                best_so_far: best_fitness,
            });

            debug!(
                generation = gen,
                average,
                best = gen_best_fitness,
                best_so_far = best_fitness,
                "generation evaluated"
            );

            // 3. Stop on a perfect board
            if best_fitness == MAX_FITNESS {
                info!(generations = gen + 1, "converged");
                return Ok(GaResult {
                    best: best_board,
                    best_fitness,
                    generations: history.len(),
                    history,
                    termination: Termination::Converged,
                });
            }

            // 4. Breed the next generation from this evaluation only
            population = next_generation(&evaluation, config, rng);
        }

        let (best, best_fitness) = best.expect("max_generations >= 1");
        info!(
            generations = config.max_generations,
            best_fitness,
            "generation budget exhausted"
        );
        Ok(GaResult {
            best,
            best_fitness,
            generations: history.len(),
            history,
            termination: Termination::Exhausted,
        })
    }
}

/// Fills a new population of `config.population_size` children.
///
/// Breeding yields children in pairs; a surplus second child on the last
/// call is dropped.
fn next_generation<R: Rng>(evaluation: &Evaluation, config: &GaConfig, rng: &mut R) -> Vec<Board> {
    let size = config.population_size;
    let mut next = Vec::with_capacity(size);
    while next.len() < size {
        let (child1, child2) = breed(
            evaluation.boards(),
            evaluation.weights(),
            config.mutation_rate,
            rng,
        );
        next.push(child1);
        if next.len() < size {
            next.push(child2);
        }
    }
    next
}

/// Runs the GA with the three core parameters and a random seed.
///
/// Shorthand for [`GaRunner::run`] with [`GaConfig::new`].
pub fn run(pop_size: usize, generations: usize, mutation_rate: f64) -> Result<GaResult> {
    GaRunner::run(&GaConfig::new(pop_size, generations, mutation_rate))
}

// ============================================================================
// Tests
// ============================================================================
