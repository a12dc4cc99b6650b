//! Steepest-descent hill climbing.
//!
//! Scores every single-queen move from the current board and takes the
//! best one, stopping at zero conflicts or at the first board no move
//! strictly improves.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.1

mod config;
mod runner;

pub use config::HillConfig;
pub use runner::{HillResult, HillRunner};
