//! Simulated Annealing (SA).
//!
//! Proposes one random single-queen move per iteration and accepts it when
//! it lowers the conflict count, or otherwise with probability
//! `exp(-delta / T)`. The temperature `T` decays geometrically, so uphill
//! moves become rarer as the run goes on.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
