//! Genetic-algorithm solver for the 8-queens problem.
//!
//! Evolves a population of queen placements toward a board where no two
//! queens attack each other:
//!
//! - **Board model** ([`board`]): one queen per column, fitness as the number
//!   of non-attacking pairs (28 is a solution), grid rendering.
//! - **Genetic Algorithm** ([`ga`]): random populations, fitness-proportionate
//!   selection, single-point crossover, per-child mutation and generational
//!   replacement with early stopping.
//!
//! All randomness flows through an explicit [`rand::Rng`] handle; seeded
//! runs are reproducible.
//!
//! # Example
//!
//! ```
//! use queens_ga::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default().with_population_size(200).with_seed(7);
//! let result = GaRunner::run(&config)?;
//! println!("{}", result.best);
//! # Ok::<(), queens_ga::Error>(())
//! ```

pub mod board;
pub mod error;
pub mod ga;
pub mod random;

pub use error::{Error, Result};
