//! Weight Solver Adapters.
//!
//! - `HttpWeightSolver` - JSON over HTTP to the solver service
//! - `MockWeightSolver` - Queue-driven double for tests

mod http_solver;
mod mock_solver;

pub use http_solver::{HttpSolverConfig, HttpWeightSolver};
pub use mock_solver::MockWeightSolver;
