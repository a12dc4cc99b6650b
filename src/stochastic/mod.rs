//! Stochastic hill climbing.
//!
//! Draws one single-queen neighbor uniformly at random per iteration and
//! moves to it when it is strictly better, or on a fair coin flip when it
//! is equally good. Worse neighbors are never taken.

mod config;
mod runner;

pub use config::StochasticConfig;
pub use runner::{StochasticResult, StochasticRunner};
