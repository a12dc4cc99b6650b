//! Error types.

use thiserror::Error;

/// Invalid parameters for a board or a search configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A board must have at least one column.
    #[error("board must have at least one column")]
    EmptyBoard,

    /// A queen's row lies outside `[0, n)`.
    #[error("row {row} in column {column} is out of range for a board of size {size}")]
    RowOutOfRange {
        column: usize,
        row: usize,
        size: usize,
    },

    /// Initial temperature must be strictly positive.
    #[error("initial_temperature must be positive, got {0}")]
    InitialTemperature(f64),

    /// Temperature floor must be positive and below the initial temperature.
    #[error("min_temperature must be in (0, initial_temperature), got {min} with initial {initial}")]
    MinTemperature { min: f64, initial: f64 },

    /// Geometric cooling rate must lie in the open interval (0, 1).
    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),
}

/// Result alias for fallible constructors and validators.
pub type Result<T> = std::result::Result<T, ConfigError>;
