//! Text rendering of a board.

use std::fmt;

use super::types::Board;

impl Board {
    /// Renders the board as a grid followed by its conflict count.
    ///
    /// One line per row, top row first; each line holds one token per
    /// column, `Q` where that column's queen stands and `.` elsewhere,
    /// separated by single spaces. The last line is `Conflicts: <k>`.
    ///
    /// ```
    /// use nqueens_search::board::Board;
    ///
    /// let board = Board::from_rows(vec![1, 3, 0, 2]).unwrap();
    /// assert_eq!(
    ///     board.render(),
    ///     ". . Q .\nQ . . .\n. . . Q\n. Q . .\nConflicts: 0\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            for column in 0..n {
                if column > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.row(column) == row { "Q" } else { "." })?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Conflicts: {}", self.conflicts())
    }
}
