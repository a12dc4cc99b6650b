//! Runs the three searches on fresh random 8×8 boards and prints the results.
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`). The seed
//! is logged at `info`; set `NQUEENS_SEED` to replay a run.

use std::error::Error;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use nqueens_search::board::Board;
use nqueens_search::hill::{HillConfig, HillRunner};
use nqueens_search::random::create_rng;
use nqueens_search::sa::{SaConfig, SaRunner};
use nqueens_search::stochastic::{StochasticConfig, StochasticRunner};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const BOARD_SIZE: usize = 8;
const INITIAL_TEMPERATURE: f64 = 1000.0;
const COOLING_RATE: f64 = 0.995;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = resolve_seed();
    info!(event = "seed", seed, "replay with NQUEENS_SEED={seed}");
    let mut rng = create_rng(seed);

    let mut out = io::stdout().lock();

    writeln!(out, "Hill Climbing:")?;
    let start = Board::random(BOARD_SIZE, &mut rng);
    let hill = HillRunner::run(start, &HillConfig::default());
    write!(out, "{}", hill.board)?;

    writeln!(out, "Stochastic Hill Climbing:")?;
    let start = Board::random(BOARD_SIZE, &mut rng);
    let stochastic = StochasticRunner::run(start, &StochasticConfig::default(), &mut rng);
    if !stochastic.termination.is_solved() {
        warn!(
            iterations = stochastic.iterations,
            termination = %stochastic.termination,
            "stochastic hill climbing stopped before a solution"
        );
    }
    write!(out, "{}", stochastic.board)?;

    writeln!(out, "Simulated Annealing:")?;
    let config = SaConfig::default()
        .with_initial_temperature(INITIAL_TEMPERATURE)
        .with_cooling_rate(COOLING_RATE);
    let start = Board::random(BOARD_SIZE, &mut rng);
    let annealed = SaRunner::run(start, &config, &mut rng);
    write!(out, "{}", annealed.board)?;

    out.flush()?;
    Ok(())
}

/// Seed from `NQUEENS_SEED` when set and valid, otherwise from the clock.
fn resolve_seed() -> u64 {
    if let Ok(raw) = std::env::var("NQUEENS_SEED") {
        match raw.trim().parse() {
            Ok(seed) => return seed,
            Err(err) => warn!(value = %raw, error = %err, "ignoring invalid NQUEENS_SEED"),
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
