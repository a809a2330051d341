//! Session-specific error types.

use thiserror::Error;

use crate::domain::comparison::{ComparisonError, ValueError};
use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId};
use crate::domain::suggest::SuggestError;

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// A dimension still has undecided pairs.
    #[error("dimension '{dimension}' has {decided} of {total} pairs decided")]
    IncompleteMatrix {
        dimension: String,
        decided: usize,
        total: usize,
    },

    /// A submission is already waiting for the solver.
    #[error("a submission is already in progress")]
    SubmissionInProgress,

    /// The session was submitted successfully and is read-only.
    #[error("session already submitted")]
    Locked,

    /// Invalid state for operation.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A solver result arrived for an attempt that is no longer pending.
    #[error("result for submission {0} is stale and was discarded")]
    StaleSubmission(SubmissionId),

    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),

    #[error("a session needs at least one dimension")]
    NoDimensions,

    /// Switching to auto would discard manual judgments.
    #[error("switching to auto mode discards existing judgments; confirm to continue")]
    ModeSwitchNeedsConfirmation,

    /// The pending submission was abandoned.
    #[error("submission cancelled")]
    Cancelled,

    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    #[error(transparent)]
    Suggest(#[from] SuggestError),
}

impl SessionError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        SessionError::InvalidState(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::IncompleteMatrix { .. } => ErrorCode::IncompleteMatrix,
            Self::SubmissionInProgress => ErrorCode::SubmissionInProgress,
            Self::Locked => ErrorCode::SessionLocked,
            Self::InvalidState(_) => ErrorCode::InvalidStateTransition,
            Self::StaleSubmission(_) => ErrorCode::StaleSubmission,
            Self::UnknownDimension(_) => ErrorCode::UnknownDimension,
            Self::NoDimensions => ErrorCode::InvalidItemSet,
            Self::ModeSwitchNeedsConfirmation => ErrorCode::ConfirmationRequired,
            Self::Cancelled => ErrorCode::Cancelled,
            Self::Comparison(err) => err.code(),
            Self::Suggest(err) => err.code(),
        }
    }
}

impl From<ValueError> for SessionError {
    fn from(err: ValueError) -> Self {
        SessionError::Comparison(err.into())
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        SessionError::InvalidState(err.to_string())
    }
}
