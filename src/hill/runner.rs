//! Steepest-descent execution loop.

use super::config::HillConfig;
use crate::board::Board;
use crate::outcome::Termination;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillResult {
    /// The board the search stopped at.
    pub board: Board,

    /// Conflicts of `board`.
    pub conflicts: usize,

    /// Number of accepted (strictly improving) moves.
    pub steps: usize,

    /// Why the search stopped.
    pub termination: Termination,

    /// Conflicts of the initial board followed by the count after each step.
    ///
    /// Strictly decreasing.
    pub cost_history: Vec<usize>,
}

/// Executes steepest-descent hill climbing.
pub struct HillRunner;

impl HillRunner {
    /// Climbs from `initial` until no move strictly improves it.
    ///
    /// Deterministic: the same start always yields the same board. Ties
    /// between equally good moves go to the first in
    /// [`Board::neighbors`] order.
    ///
    /// ```
    /// use nqueens_search::board::Board;
    /// use nqueens_search::hill::{HillConfig, HillRunner};
    ///
    /// let start = Board::from_rows(vec![0, 3, 0, 2]).unwrap();
    /// let result = HillRunner::run(start, &HillConfig::default());
    /// assert_eq!(result.conflicts, 0);
    /// assert_eq!(result.steps, 1);
    /// ```
    pub fn run(initial: Board, config: &HillConfig) -> HillResult {
        let mut current = initial;
        let mut current_conflicts = current.conflicts();
        let mut cost_history = vec![current_conflicts];
        let mut steps = 0usize;

        debug!(
            event = "search_start",
            algorithm = "hill_climbing",
            size = current.size(),
            conflicts = current_conflicts,
        );

        let termination = loop {
            if current_conflicts == 0 {
                break Termination::Solved;
            }

            let Some((column, row, conflicts)) = best_move(&current, config.parallel) else {
                break Termination::LocalOptimum;
            };
            if conflicts >= current_conflicts {
                break Termination::LocalOptimum;
            }

            current = current.with_move(column, row);
            current_conflicts = conflicts;
            steps += 1;
            cost_history.push(current_conflicts);

            trace!(step = steps, column, row, conflicts = current_conflicts);
        };

        debug!(
            event = "search_end",
            algorithm = "hill_climbing",
            conflicts = current_conflicts,
            iterations = steps,
            termination = %termination,
        );

        HillResult {
            board: current,
            conflicts: current_conflicts,
            steps,
            termination,
            cost_history,
        }
    }
}

/// Finds the lowest-conflict single-queen move, earliest on ties.
///
/// Returns `(column, row, conflicts)`, or `None` for a one-column board.
fn best_move(board: &Board, parallel: bool) -> Option<(usize, usize, usize)> {
    #[cfg(feature = "parallel")]
    if parallel {
        let moves: Vec<(usize, usize)> = board.moves().collect();
        return moves
            .par_iter()
            .enumerate()
            .map(|(index, &(column, row))| {
                (board.with_move(column, row).conflicts(), index, column, row)
            })
            .min_by_key(|&(conflicts, index, _, _)| (conflicts, index))
            .map(|(conflicts, _, column, row)| (column, row, conflicts));
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let mut best: Option<(usize, usize, usize)> = None;
    for (column, row) in board.moves() {
        let conflicts = board.with_move(column, row).conflicts();
        if best.is_none_or(|(_, _, b)| conflicts < b) {
            best = Some((column, row, conflicts));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_solved_board_returns_unchanged() {
        let start = Board::from_rows(vec![1, 3, 0, 2]).unwrap();
        let result = HillRunner::run(start.clone(), &HillConfig::default());
        assert_eq!(result.board, start);
        assert_eq!(result.steps, 0);
        assert_eq!(result.termination, Termination::Solved);
        assert_eq!(result.cost_history, vec![0]);
    }

    #[test]
    fn test_single_fixable_conflict_solves_in_one_step() {
        let start = Board::from_rows(vec![0, 3, 0, 2]).unwrap();
        assert_eq!(start.conflicts(), 1);

        let result = HillRunner::run(start, &HillConfig::default());

        assert_eq!(result.conflicts, 0);
        assert_eq!(result.steps, 1);
        assert!(result.termination.is_solved());
        assert_eq!(result.board.rows(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_never_worse_than_start() {
        let start = Board::from_rows(vec![0, 0, 2, 3]).unwrap();
        let result = HillRunner::run(start, &HillConfig::default());
        assert!(result.conflicts <= 4);
        assert_eq!(result.conflicts, result.board.conflicts());
    }

    #[test]
    fn test_tie_break_prefers_first_neighbor() {
        // Every single move on a 2x2 board keeps exactly one conflict, so
        // the climb stops immediately without moving.
        let start = Board::from_rows(vec![0, 0]).unwrap();
        let result = HillRunner::run(start.clone(), &HillConfig::default());
        assert_eq!(result.board, start);
        assert_eq!(result.termination, Termination::LocalOptimum);

        // From all-zero rows on 4x4 the first strictly best move is chosen;
        // rerunning gives the identical board.
        let start = Board::from_rows(vec![0, 0, 0, 0]).unwrap();
        let a = HillRunner::run(start.clone(), &HillConfig::default());
        let b = HillRunner::run(start, &HillConfig::default());
        assert_eq!(a.board, b.board);
    }

    #[test]
    fn test_first_step_takes_earliest_minimum() {
        let start = Board::from_rows(vec![0, 0, 0, 0]).unwrap();
        let min = start
            .neighbors()
            .iter()
            .map(Board::conflicts)
            .min()
            .unwrap();
        let first = start
            .neighbors()
            .into_iter()
            .find(|b| b.conflicts() == min)
            .unwrap();

        let (column, row, conflicts) = best_move(&start, false).unwrap();
        assert_eq!(conflicts, min);
        assert_eq!(start.with_move(column, row), first);
    }

    #[test]
    fn test_cost_history_strictly_decreasing() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let start = Board::random(8, &mut rng);
            let initial = start.conflicts();
            let result = HillRunner::run(start, &HillConfig::default());

            assert_eq!(result.cost_history[0], initial);
            assert_eq!(result.cost_history.len(), result.steps + 1);
            for window in result.cost_history.windows(2) {
                assert!(
                    window[1] < window[0],
                    "each step must strictly improve: {} >= {}",
                    window[1],
                    window[0]
                );
            }
            assert!(result.conflicts <= initial);
        }
    }

    #[test]
    fn test_local_optimum_has_no_improving_neighbor() {
        let mut rng = create_rng(7);
        for _ in 0..100 {
            let result = HillRunner::run(Board::random(8, &mut rng), &HillConfig::default());
            if result.termination == Termination::LocalOptimum {
                assert!(result.conflicts > 0);
                assert!(result
                    .board
                    .neighbors()
                    .iter()
                    .all(|b| b.conflicts() >= result.conflicts));
            }
        }
    }

    #[test]
    fn test_parallel_flag_matches_sequential() {
        let mut rng = create_rng(99);
        for _ in 0..50 {
            let start = Board::random(8, &mut rng);
            let seq = HillRunner::run(start.clone(), &HillConfig::default());
            let par = HillRunner::run(start, &HillConfig::default().with_parallel(true));
            assert_eq!(seq.board, par.board);
            assert_eq!(seq.cost_history, par.cost_history);
        }
    }
}
