//! Session domain module.
//!
//! A comparison session ties an item set to one matrix per dimension,
//! walks the user through the pairs, and runs the submission pipeline
//! against the external weight solver.

mod aggregate;
mod context;
mod errors;
mod handoff;
mod mode;
mod submission;

pub use aggregate::{ComparisonSession, DimensionState, SubmissionTicket, CRITERIA_DIMENSION};
pub use context::DecisionContext;
pub use errors::SessionError;
pub use handoff::WeightHandoff;
pub use mode::EvaluationMode;
pub use submission::{FailureKind, SubmissionFailure, SubmissionStatus};
