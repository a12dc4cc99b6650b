//! Local search for the N-Queens problem.
//!
//! Places `n` queens on an `n`×`n` board so that no two share a row or a
//! diagonal, using three single-solution trajectory searches over one
//! board representation:
//!
//! - **Hill Climbing**: steepest descent over all single-queen moves,
//!   stopping at the first local optimum.
//! - **Stochastic Hill Climbing**: one uniformly drawn neighbor per
//!   iteration, accepted when better or, on a coin flip, when equal.
//! - **Simulated Annealing (SA)**: one random move per iteration under the
//!   Metropolis criterion with geometric cooling.
//!
//! # Architecture
//!
//! [`board::Board`] stores one row per column, so a queen per column is
//! guaranteed by construction and the objective is the number of queen
//! pairs sharing a row or diagonal. Every search takes its randomness from
//! an explicit generator (see [`random::create_rng`]) so a run can be
//! replayed from its seed.

pub mod board;
pub mod error;
pub mod hill;
pub mod outcome;
pub mod random;
pub mod sa;
pub mod stochastic;

pub use error::ConfigError;
pub use outcome::Termination;
