//! Stochastic hill climbing configuration.

/// Configuration for stochastic hill climbing.
///
/// # Examples
///
/// ```
/// use nqueens_search::stochastic::StochasticConfig;
///
/// let config = StochasticConfig::default().with_max_iterations(5_000);
/// assert_eq!(config.max_iterations, 5_000);
///
/// let unbounded = StochasticConfig::unbounded();
/// assert_eq!(unbounded.max_iterations, 0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StochasticConfig {
    /// Maximum number of proposals (hard budget). 0 = no limit.
    ///
    /// Without a limit the search only returns once it finds a solution,
    /// which may never happen from a strict local minimum.
    pub max_iterations: usize,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
        }
    }
}

impl StochasticConfig {
    /// A configuration with no iteration budget.
    pub fn unbounded() -> Self {
        Self { max_iterations: 0 }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}
