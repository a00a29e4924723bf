//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Error, Result};

/// Configuration for the 8-queens genetic algorithm.
///
/// # Defaults
///
/// ```
/// use queens_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 300);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_max_generations(1000)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of boards in every generation.
    pub population_size: usize,

    /// Maximum number of generations before the run is declared exhausted.
    pub max_generations: usize,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 300,
            mutation_rate: 0.05,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Population sizes explored by [`sweep_grid`](Self::sweep_grid).
    pub const SWEEP_POPULATIONS: [usize; 3] = [10, 100, 500];

    /// Mutation rates explored by [`sweep_grid`](Self::sweep_grid).
    pub const SWEEP_MUTATION_RATES: [f64; 3] = [0.01, 0.05, 0.1];

    /// Creates a configuration from the three core run parameters.
    pub fn new(population_size: usize, max_generations: usize, mutation_rate: f64) -> Self {
        Self {
            population_size,
            max_generations,
            mutation_rate,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Out-of-range values are kept as given and rejected by
    /// [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the random seed.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the parameter sweep grid: every combination of
    /// [`SWEEP_POPULATIONS`](Self::SWEEP_POPULATIONS) and
    /// [`SWEEP_MUTATION_RATES`](Self::SWEEP_MUTATION_RATES), 300 generations
    /// each.
    ///
    /// Populations vary in the outer loop, mutation rates in the inner one.
    pub fn sweep_grid() -> Vec<Self> {
        Self::grid(&Self::SWEEP_POPULATIONS, &Self::SWEEP_MUTATION_RATES, 300)
    }

    /// Builds one configuration per `(population, mutation rate)` pair.
    pub fn grid(populations: &[usize], mutation_rates: &[f64], max_generations: usize) -> Vec<Self> {
        populations
            .iter()
            .flat_map(|&pop| {
                mutation_rates
                    .iter()
                    .map(move |&rate| Self::new(pop, max_generations, rate))
            })
            .collect()
    }

    /// Validates the configuration.
    ///
    /// Returns [`Error::InvalidConfig`] if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(Error::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 300);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_mutation_rate(0.1)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_optional_seed() {
        let config = GaConfig::default().with_seed(3).with_optional_seed(None);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::new(1, 1, 0.0).validate().is_ok());
        assert!(GaConfig::new(1, 1, 1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let err = GaConfig::default()
            .with_population_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(msg) if msg.contains("population_size")));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mutation_rate_out_of_range() {
        for rate in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = GaConfig::default().with_mutation_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_builder_does_not_clamp() {
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!((config.mutation_rate - 2.0).abs() < 1e-10);
    }

    // ---- Sweep grid ----

    #[test]
    fn test_sweep_grid() {
        let grid = GaConfig::sweep_grid();
        assert_eq!(grid.len(), 9);
        assert!(grid.iter().all(|c| c.max_generations == 300));
        assert!(grid.iter().all(|c| c.validate().is_ok()));

        assert_eq!(grid[0].population_size, 10);
        assert!((grid[0].mutation_rate - 0.01).abs() < 1e-10);
        assert_eq!(grid[2].population_size, 10);
        assert!((grid[2].mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(grid[8].population_size, 500);
    }

    #[test]
    fn test_grid_empty_axis() {
        assert!(GaConfig::grid(&[], &[0.1], 10).is_empty());
        assert!(GaConfig::grid(&[10], &[], 10).is_empty());
    }
}
