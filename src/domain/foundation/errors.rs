//! Error types shared across the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    SyntaxError,
    DivisionByZero,
    OutOfRange,

    // Construction errors
    InvalidItemSet,
    DuplicateItem,

    // Lookup errors
    UnknownItem,
    UnknownPair,
    UnknownDimension,
    NotYetJudged,

    // Sequencing errors
    IncompleteJudgment,
    IncompleteMatrix,
    SubmissionInProgress,
    SessionLocked,
    InvalidStateTransition,
    StaleSubmission,
    ConfirmationRequired,
    Cancelled,

    // Heuristic errors
    UnsupportedDimension,
    MissingAttributes,

    // Remote errors
    SolverUnavailable,
    SolverTimeout,
    SolverRejected,
    InconsistentMatrix,
    InternalError,
}

/// Coarse grouping used to decide how an error is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad user input; the edit is rejected and prior state is kept.
    Input,
    /// A transition was attempted out of order; no state change.
    Sequencing,
    /// The session cannot start.
    Construction,
    /// The solver failed or judged the matrix inconsistent.
    Remote,
}

impl ErrorCode {
    /// Returns the category this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        use ErrorCode::*;
        match self {
            SyntaxError | DivisionByZero | OutOfRange | UnknownItem | UnknownPair
            | UnknownDimension | NotYetJudged | MissingAttributes | UnsupportedDimension => {
                ErrorCategory::Input
            }
            InvalidItemSet | DuplicateItem => ErrorCategory::Construction,
            IncompleteJudgment | IncompleteMatrix | SubmissionInProgress | SessionLocked
            | InvalidStateTransition | StaleSubmission | ConfirmationRequired | Cancelled => {
                ErrorCategory::Sequencing
            }
            SolverUnavailable | SolverTimeout | SolverRejected | InconsistentMatrix
            | InternalError => ErrorCategory::Remote,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::SyntaxError => "SYNTAX_ERROR",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidItemSet => "INVALID_ITEM_SET",
            ErrorCode::DuplicateItem => "DUPLICATE_ITEM",
            ErrorCode::UnknownItem => "UNKNOWN_ITEM",
            ErrorCode::UnknownPair => "UNKNOWN_PAIR",
            ErrorCode::UnknownDimension => "UNKNOWN_DIMENSION",
            ErrorCode::NotYetJudged => "NOT_YET_JUDGED",
            ErrorCode::IncompleteJudgment => "INCOMPLETE_JUDGMENT",
            ErrorCode::IncompleteMatrix => "INCOMPLETE_MATRIX",
            ErrorCode::SubmissionInProgress => "SUBMISSION_IN_PROGRESS",
            ErrorCode::SessionLocked => "SESSION_LOCKED",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::StaleSubmission => "STALE_SUBMISSION",
            ErrorCode::ConfirmationRequired => "CONFIRMATION_REQUIRED",
            ErrorCode::Cancelled => "CANCELLED",
            ErrorCode::UnsupportedDimension => "UNSUPPORTED_DIMENSION",
            ErrorCode::MissingAttributes => "MISSING_ATTRIBUTES",
            ErrorCode::SolverUnavailable => "SOLVER_UNAVAILABLE",
            ErrorCode::SolverTimeout => "SOLVER_TIMEOUT",
            ErrorCode::SolverRejected => "SOLVER_REJECTED",
            ErrorCode::InconsistentMatrix => "INCONSISTENT_MATRIX",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
