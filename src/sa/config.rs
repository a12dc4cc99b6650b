//! SA configuration.

use crate::error::{ConfigError, Result};

/// Configuration for Simulated Annealing over boards.
///
/// Temperature follows geometric cooling, `T_{k+1} = cooling_rate * T_k`,
/// once per proposal. The run ends when `T` is no longer above
/// `min_temperature` or when the board is solved.
///
/// # Examples
///
/// ```
/// use nqueens_search::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_min_temperature(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Temperature floor. The loop runs only while `T > min_temperature`.
    pub min_temperature: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            min_temperature: 1.0,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0) {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !(self.min_temperature > 0.0 && self.min_temperature < self.initial_temperature) {
            return Err(ConfigError::MinTemperature {
                min: self.min_temperature,
                initial: self.initial_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        Ok(())
    }

    /// Number of proposals before the temperature reaches the floor.
    ///
    /// `⌈ln(min_temperature / initial_temperature) / ln(cooling_rate)⌉`.
    /// A run that never finds a solution performs exactly this many
    /// iterations, whatever it accepts along the way.
    ///
    /// ```
    /// use nqueens_search::sa::SaConfig;
    ///
    /// assert_eq!(SaConfig::default().scheduled_iterations(), 1379);
    /// ```
    pub fn scheduled_iterations(&self) -> usize {
        let ratio = (self.min_temperature / self.initial_temperature).ln();
        (ratio / self.cooling_rate.ln()).ceil() as usize
    }
}
