//! queens-ga: command line front end for the 8-queens genetic algorithm.
//!
//! ```bash
//! queens-ga solve --population 200 --generations 1000 --seed 42
//! queens-ga sweep --generations 300
//! queens-ga history --population 100 > fitness.csv
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `warn`; `RUST_LOG=queens_ga=debug` traces every generation).

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use queens_ga::ga::{GaConfig, GaResult, GaRunner, Termination};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Solve the 8-queens problem with a genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "queens-ga")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run once and print the best board found.
    Solve(RunArgs),

    /// Run every (population, mutation rate) combination and print the best
    /// fitness of each.
    Sweep(SweepArgs),

    /// Run once and print the per-generation fitness history as CSV.
    History(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Boards per generation.
    #[arg(short, long, default_value_t = 100)]
    population: usize,

    /// Maximum number of generations.
    #[arg(short, long, default_value_t = 300)]
    generations: usize,

    /// Per-child mutation probability (0.0 - 1.0).
    #[arg(short, long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Seed for a reproducible run.
    #[arg(short, long, env = "QUEENS_GA_SEED")]
    seed: Option<u64>,
}

impl RunArgs {
    fn config(&self) -> GaConfig {
        GaConfig::new(self.population, self.generations, self.mutation_rate)
            .with_optional_seed(self.seed)
    }
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// Population sizes to try.
    #[arg(long, value_delimiter = ',', default_values_t = GaConfig::SWEEP_POPULATIONS)]
    populations: Vec<usize>,

    /// Mutation rates to try.
    #[arg(long, value_delimiter = ',', default_values_t = GaConfig::SWEEP_MUTATION_RATES)]
    mutation_rates: Vec<f64>,

    /// Maximum number of generations per run.
    #[arg(short, long, default_value_t = 300)]
    generations: usize,

    /// Seed for a reproducible sweep; each combination uses the same seed.
    #[arg(short, long, env = "QUEENS_GA_SEED")]
    seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn solve(args: &RunArgs, out: &mut impl Write) -> Result<()> {
    let result = GaRunner::run(&args.config()).context("solve run failed")?;

    writeln!(out, "{}", result.best)?;
    writeln!(out, "rows:         {:?}", result.best.rows())?;
    writeln!(out, "fitness:      {}", result.best_fitness)?;
    writeln!(out, "generations:  {}", result.generations)?;
    writeln!(out, "termination:  {}", termination_label(&result))?;
    Ok(())
}

fn sweep(args: &SweepArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "population,mutation_rate,best_fitness,generations")?;
    for config in GaConfig::grid(&args.populations, &args.mutation_rates, args.generations) {
        let config = config.with_optional_seed(args.seed);
        info!(
            population = config.population_size,
            mutation_rate = config.mutation_rate,
            "sweep run"
        );
        let result = GaRunner::run(&config).with_context(|| {
            format!(
                "sweep run failed for population {} and mutation rate {}",
                config.population_size, config.mutation_rate
            )
        })?;
        writeln!(
            out,
            "{},{},{},{}",
            config.population_size, config.mutation_rate, result.best_fitness, result.generations
        )?;
    }
    Ok(())
}

fn history(args: &RunArgs, out: &mut impl Write) -> Result<()> {
    let result = GaRunner::run(&args.config()).context("history run failed")?;

    writeln!(out, "generation,average,best,best_so_far")?;
    for (gen, stats) in result.history.iter().enumerate() {
        writeln!(
            out,
            "{},{:.4},{},{}",
            gen, stats.average, stats.best, stats.best_so_far
        )?;
    }
    Ok(())
}

fn termination_label(result: &GaResult) -> &'static str {
    match result.termination {
        Termination::Converged => "converged",
        Termination::Exhausted => "exhausted",
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Solve(args) => solve(args, &mut out),
        Command::Sweep(args) => sweep(args, &mut out),
        Command::History(args) => history(args, &mut out),
    }
}
