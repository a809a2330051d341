//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, time and progress value objects, error codes,
//! and the state machine trait used across the pairwise engine.

mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCategory, ErrorCode};
pub use ids::{SessionId, SubmissionId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
