//! Board state for the N-Queens problem.
//!
//! A board stores one row index per column, so exactly one queen sits in
//! every column by construction. Rows and diagonals may be shared; those
//! clashes are what the searches minimize.

mod render;
mod types;

pub use types::Board;
