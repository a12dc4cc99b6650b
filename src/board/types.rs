//! The [`Board`] type and its conflict objective.

use rand::Rng;

use crate::error::{ConfigError, Result};

/// A placement of one queen per column.
///
/// `rows()[c]` is the row of the queen standing in column `c`. Every entry
/// lies in `[0, size())`; the length never changes after construction.
///
/// Boards have value semantics: [`with_move`](Board::with_move) and
/// [`neighbors`](Board::neighbors) return fresh copies and leave `self`
/// untouched, so a search can weigh a candidate against `current` before
/// deciding to replace it.
///
/// # Examples
///
/// ```
/// use nqueens_search::board::Board;
///
/// let board = Board::from_rows(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(board.conflicts(), 0);
/// assert_eq!(board.with_move(0, 0).conflicts(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    queens: Vec<usize>,
}

impl Board {
    /// Creates an `n`-column board with each row drawn uniformly from `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        assert!(n > 0, "board must have at least one column");
        let queens = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { queens }
    }

    /// Creates a board from explicit rows, one per column.
    pub fn from_rows(rows: Vec<usize>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if let Some((column, &row)) = rows.iter().enumerate().find(|&(_, &r)| r >= size) {
            return Err(ConfigError::RowOutOfRange { column, row, size });
        }
        Ok(Self { queens: rows })
    }

    /// Number of columns (and rows).
    pub fn size(&self) -> usize {
        self.queens.len()
    }

    /// Row of every queen, indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.queens
    }

    /// Row of the queen in `column`.
    pub fn row(&self, column: usize) -> usize {
        self.queens[column]
    }

    /// Counts queen pairs that share a row or a diagonal.
    ///
    /// Each of the `n * (n - 1) / 2` column pairs contributes at most one
    /// conflict. Runs in O(n²).
    pub fn conflicts(&self) -> usize {
        let n = self.queens.len();
        let mut conflicts = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                let (ri, rj) = (self.queens[i], self.queens[j]);
                if ri == rj || ri.abs_diff(rj) == j - i {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Returns a copy with the queen in `column` moved to `row`.
    ///
    /// # Panics
    /// Panics if `column` or `row` is out of range.
    pub fn with_move(&self, column: usize, row: usize) -> Self {
        assert!(
            row < self.size(),
            "row {row} out of range for board of size {}",
            self.size()
        );
        let mut next = self.clone();
        next.queens[column] = row;
        next
    }

    /// Enumerates every board reachable by moving exactly one queen.
    ///
    /// Order is columns ascending, then rows ascending, skipping each
    /// queen's current row, for `n * (n - 1)` neighbors in total. Steepest
    /// descent relies on this order for tie-breaking.
    pub fn neighbors(&self) -> Vec<Board> {
        self.moves()
            .map(|(column, row)| self.with_move(column, row))
            .collect()
    }

    /// Yields `(column, row)` for every single-queen move, in neighbor order.
    pub(crate) fn moves(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |column| {
            (0..n)
                .filter(move |&row| row != self.queens[column])
                .map(move |row| (column, row))
        })
    }
}
