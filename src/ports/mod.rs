//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WeightSolver` - Remote weight derivation and consistency check

mod weight_solver;

pub use weight_solver::{
    ConsistencyReport, ItemWeight, SolverError, SolverRequest, SolverResponse, WeightSolver,
    WireComparison, CONSISTENCY_THRESHOLD,
};
