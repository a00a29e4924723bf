//! Genetic Algorithm for the 8-queens problem.
//!
//! A generational GA over [`Board`](crate::board::Board)s: every generation
//! is evaluated, bred into a full replacement population, and discarded.
//! There is no elitism; the best board ever seen is tracked on the side.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations,
//!   mutation rate, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best board, its fitness and the per-generation history
//!
//! # Submodules
//!
//! - [`population`]: Random initial populations
//! - [`evaluation`]: Fitness scoring and normalization into weights
//! - [`selection`]: Roulette wheel selection with a uniform fallback
//! - [`operators`]: Single-point crossover, row mutation, breeding
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod evaluation;
pub mod operators;
pub mod population;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use runner::{run, GaResult, GaRunner, GenerationStats, Termination};
