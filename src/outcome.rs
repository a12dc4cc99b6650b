//! Why a search stopped.

use std::fmt;

/// The reason a search returned.
///
/// Only [`Solved`](Termination::Solved) guarantees a zero-conflict board;
/// the other variants return whatever board the search was holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The board has no conflicts.
    Solved,
    /// No single-queen move strictly improves the board.
    LocalOptimum,
    /// Temperature dropped to the floor before a solution was found.
    Cooled,
    /// The configured iteration budget ran out.
    IterationLimit,
}

impl Termination {
    pub fn is_solved(self) -> bool {
        self == Termination::Solved
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Termination::Solved => "solved",
            Termination::LocalOptimum => "local_optimum",
            Termination::Cooled => "cooled",
            Termination::IterationLimit => "iteration_limit",
        };
        f.write_str(name)
    }
}
