//! Stochastic hill climbing execution loop.

use super::config::StochasticConfig;
use crate::board::Board;
use crate::outcome::Termination;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a stochastic hill climbing run.
#[derive(Debug, Clone)]
pub struct StochasticResult {
    /// The board the search stopped at.
    pub board: Board,

    /// Conflicts of `board`.
    pub conflicts: usize,

    /// Total number of proposals drawn.
    pub iterations: usize,

    /// Number of accepted proposals (improving and sideways).
    pub accepted_moves: usize,

    /// Number of accepted proposals with equal conflicts.
    pub sideways_moves: usize,

    /// Why the search stopped.
    pub termination: Termination,
}

/// Executes stochastic hill climbing.
pub struct StochasticRunner;

impl StochasticRunner {
    /// Climbs from `initial`, drawing all randomness from `rng`.
    ///
    /// Each iteration builds the full single-move neighborhood, picks one
    /// neighbor uniformly and accepts it if it has fewer conflicts, or with
    /// probability 1/2 if it has the same number.
    ///
    /// ```
    /// use nqueens_search::board::Board;
    /// use nqueens_search::random::create_rng;
    /// use nqueens_search::stochastic::{StochasticConfig, StochasticRunner};
    ///
    /// let mut rng = create_rng(42);
    /// let start = Board::random(8, &mut rng);
    /// let result = StochasticRunner::run(start, &StochasticConfig::default(), &mut rng);
    /// assert_eq!(result.conflicts, result.board.conflicts());
    /// ```
    pub fn run<R: Rng>(initial: Board, config: &StochasticConfig, rng: &mut R) -> StochasticResult {
        let mut current = initial;
        let mut current_conflicts = current.conflicts();
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut sideways_moves = 0usize;

        debug!(
            event = "search_start",
            algorithm = "stochastic_hill_climbing",
            size = current.size(),
            conflicts = current_conflicts,
        );

        let termination = loop {
            if current_conflicts == 0 {
                break Termination::Solved;
            }
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break Termination::IterationLimit;
            }

            let neighbors = current.neighbors();
            let Some(next) = neighbors.choose(rng) else {
                break Termination::LocalOptimum;
            };
            let next_conflicts = next.conflicts();
            iterations += 1;

            let accept = if next_conflicts < current_conflicts {
                true
            } else if next_conflicts == current_conflicts {
                let flip = rng.random_bool(0.5);
                if flip {
                    sideways_moves += 1;
                }
                flip
            } else {
                false
            };

            if accept {
                current = next.clone();
                current_conflicts = next_conflicts;
                accepted_moves += 1;
                trace!(iteration = iterations, conflicts = current_conflicts);
            }
        };

        debug!(
            event = "search_end",
            algorithm = "stochastic_hill_climbing",
            conflicts = current_conflicts,
            iterations,
            accepted_moves,
            termination = %termination,
        );

        StochasticResult {
            board: current,
            conflicts: current_conflicts,
            iterations,
            accepted_moves,
            sideways_moves,
            termination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_solved_board_returns_immediately() {
        let start = Board::from_rows(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
        let mut rng = create_rng(42);
        let result = StochasticRunner::run(start.clone(), &StochasticConfig::default(), &mut rng);

        assert_eq!(result.board, start);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.termination, Termination::Solved);
    }

    #[test]
    fn test_solved_board_draws_no_randomness() {
        let start = Board::from_rows(vec![1, 3, 0, 2]).unwrap();
        let mut rng = create_rng(5);
        let _ = StochasticRunner::run(start, &StochasticConfig::unbounded(), &mut rng);

        let mut fresh = create_rng(5);
        assert_eq!(rng.random::<u64>(), fresh.random::<u64>());
    }

    #[test]
    fn test_never_accepts_worse() {
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let start = Board::random(8, &mut rng);
            let initial = start.conflicts();
            let config = StochasticConfig::default().with_max_iterations(500);
            let result = StochasticRunner::run(start, &config, &mut rng);

            assert!(result.conflicts <= initial);
            assert_eq!(result.conflicts, result.board.conflicts());
            assert!(result.sideways_moves <= result.accepted_moves);
            assert!(result.accepted_moves <= result.iterations);
        }
    }

    #[test]
    fn test_iteration_limit_stops_search() {
        // No 3x3 solution exists, so only the budget can end the run.
        let mut rng = create_rng(3);
        let start = Board::random(3, &mut rng);
        let config = StochasticConfig::default().with_max_iterations(250);
        let result = StochasticRunner::run(start, &config, &mut rng);

        assert_eq!(result.iterations, 250);
        assert_eq!(result.termination, Termination::IterationLimit);
        assert!(result.conflicts > 0);
    }

    #[test]
    fn test_reproducible_with_same_seed() {
        let run = |seed| {
            let mut rng = create_rng(seed);
            let start = Board::random(8, &mut rng);
            StochasticRunner::run(start, &StochasticConfig::default(), &mut rng)
        };
        let a = run(11);
        let b = run(11);
        assert_eq!(a.board, b.board);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_solves_some_eight_queens_starts() {
        let mut rng = create_rng(2024);
        let solved = (0..20)
            .filter(|_| {
                let start = Board::random(8, &mut rng);
                let config = StochasticConfig::default().with_max_iterations(5_000);
                StochasticRunner::run(start, &config, &mut rng)
                    .termination
                    .is_solved()
            })
            .count();
        assert!(solved >= 1, "expected at least one solved run, got {solved}");
    }
}
