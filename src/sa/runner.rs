//! SA execution loop.

use super::config::SaConfig;
use crate::board::Board;
use crate::outcome::Termination;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The board the search stopped at (the current state, not a best-so-far).
    pub board: Board,

    /// Conflicts of `board`.
    pub conflicts: usize,

    /// Total number of proposals.
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted proposals (including improvements and no-ops).
    pub accepted_moves: usize,

    /// Number of improving proposals.
    pub improving_moves: usize,

    /// Why the search stopped.
    pub termination: Termination,
}

/// Executes Simulated Annealing over boards.
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `initial`, drawing all randomness from `rng`.
    ///
    /// Each iteration moves one uniformly chosen queen to a uniformly
    /// chosen row (possibly its own), then applies the Metropolis test
    /// `delta < 0 || exp(-delta / T) > u` with `u` uniform in `[0, 1)`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    ///
    /// ```
    /// use nqueens_search::board::Board;
    /// use nqueens_search::random::create_rng;
    /// use nqueens_search::sa::{SaConfig, SaRunner};
    ///
    /// let mut rng = create_rng(42);
    /// let start = Board::random(8, &mut rng);
    /// let result = SaRunner::run(start, &SaConfig::default(), &mut rng);
    /// assert!(result.iterations <= SaConfig::default().scheduled_iterations());
    /// ```
    pub fn run<R: Rng>(initial: Board, config: &SaConfig, rng: &mut R) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let n = initial.size();
        let mut current = initial;
        let mut current_conflicts = current.conflicts();
        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        debug!(
            event = "search_start",
            algorithm = "simulated_annealing",
            size = n,
            conflicts = current_conflicts,
            temperature,
        );

        let termination = loop {
            if current_conflicts == 0 {
                break Termination::Solved;
            }
            if temperature <= config.min_temperature {
                break Termination::Cooled;
            }

            let column = rng.random_range(0..n);
            let row = rng.random_range(0..n);
            let next = current.with_move(column, row);
            let next_conflicts = next.conflicts();
            let delta = next_conflicts as i64 - current_conflicts as i64;

            // Metropolis acceptance criterion
            let accept = if delta < 0 {
                improving_moves += 1;
                true
            } else {
                (-(delta as f64) / temperature).exp() > rng.random::<f64>()
            };

            if accept {
                current = next;
                current_conflicts = next_conflicts;
                accepted_moves += 1;
                trace!(
                    iteration = iterations,
                    temperature,
                    delta,
                    conflicts = current_conflicts
                );
            }

            iterations += 1;
            temperature *= config.cooling_rate;
        };

        debug!(
            event = "search_end",
            algorithm = "simulated_annealing",
            conflicts = current_conflicts,
            iterations,
            accepted_moves,
            final_temperature = temperature,
            termination = %termination,
        );

        SaResult {
            board: current,
            conflicts: current_conflicts,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            termination,
        }
    }
}
