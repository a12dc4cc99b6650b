//! Steepest-descent hill climbing configuration.

/// Configuration for steepest-descent hill climbing.
///
/// # Examples
///
/// ```
/// use nqueens_search::hill::HillConfig;
///
/// let config = HillConfig::default().with_parallel(true);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillConfig {
    /// Score neighbors in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature. The chosen move is identical either way.
    pub parallel: bool,
}

impl HillConfig {
    /// Enables or disables parallel neighbor scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
