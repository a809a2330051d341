//! Adapters - Implementations of port interfaces.
//!
//! - `solver` - Weight solver clients (HTTP, mock)

pub mod solver;

pub use solver::{HttpSolverConfig, HttpWeightSolver, MockWeightSolver};
