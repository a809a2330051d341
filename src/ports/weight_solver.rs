//! Weight Solver Port - Interface to the external weight/consistency solver.
//!
//! The solver receives a complete set of pairwise judgments plus the
//! decision context, derives normalized weights, and checks the
//! consistency ratio. How it computes either is not our concern; only the
//! wire shape is fixed here.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedSolver;
//!
//! #[async_trait]
//! impl WeightSolver for FixedSolver {
//!     async fn solve(&self, _request: SolverRequest) -> Result<SolverResponse, SolverError> {
//!         Ok(SolverResponse::consistent(vec![ItemWeight::new("Price", 1.0)], 0.0))
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::comparison::JudgmentValue;
use crate::domain::foundation::ErrorCode;
use crate::domain::session::{DecisionContext, EvaluationMode};

/// Ratios at or above this are inconsistent.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Port for the remote weight/consistency solver.
///
/// Implementations make exactly one attempt per call; the submission
/// pipeline never retries on its own.
#[async_trait]
pub trait WeightSolver: Send + Sync {
    /// Submits a complete matrix and waits for the verdict.
    async fn solve(&self, request: SolverRequest) -> Result<SolverResponse, SolverError>;
}

/// Payload sent to the solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverRequest {
    /// Forwarded untouched.
    pub decision_context: DecisionContext,
    pub evaluation_mode: EvaluationMode,
    pub comparisons: Vec<WireComparison>,
}

/// One judgment on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireComparison {
    pub item_a: String,
    pub item_b: String,
    /// A JSON number, or an `"n/d"` string, exactly as entered.
    pub value: JudgmentValue,
    /// The item `value` is expressed relative to.
    pub favored: String,
    /// Set only when the session compares on more than one dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
}

/// Solver verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SolverResponse {
    Success {
        #[serde(default)]
        weights: Vec<ItemWeight>,
        consistency: ConsistencyReport,
    },
    Error {
        message: String,
    },
}

impl SolverResponse {
    pub fn consistent(weights: Vec<ItemWeight>, ratio: f64) -> Self {
        Self::Success {
            weights,
            consistency: ConsistencyReport {
                is_consistent: true,
                ratio,
                message: None,
                failed_dimension: None,
            },
        }
    }

    pub fn inconsistent(ratio: f64, message: impl Into<String>) -> Self {
        Self::Success {
            weights: Vec::new(),
            consistency: ConsistencyReport {
                is_consistent: false,
                ratio,
                message: Some(message.into()),
                failed_dimension: None,
            },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Scopes an inconsistency to one dimension.
    pub fn in_dimension(mut self, dimension: impl Into<String>) -> Self {
        if let Self::Success { consistency, .. } = &mut self {
            consistency.failed_dimension = Some(dimension.into());
        }
        self
    }
}

/// Derived weight of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWeight {
    pub item: String,
    pub weight: f64,
}

impl ItemWeight {
    pub fn new(item: impl Into<String>, weight: f64) -> Self {
        Self {
            item: item.into(),
            weight,
        }
    }
}

/// The solver's consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub is_consistent: bool,
    pub ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_dimension: Option<String>,
}

/// Transport-level solver failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No response within the transport timeout.
    #[error("solver did not respond within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Connection could not be established or was dropped.
    #[error("network error: {0}")]
    Network(String),

    /// Solver returned a server error.
    #[error("solver unavailable: {0}")]
    Unavailable(String),

    /// Solver refused the request.
    #[error("solver rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("unreadable solver response: {0}")]
    Parse(String),
}

impl SolverError {
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Timeout { .. } => ErrorCode::SolverTimeout,
            Self::Network(_) | Self::Unavailable(_) => ErrorCode::SolverUnavailable,
            Self::Rejected { .. } => ErrorCode::SolverRejected,
            Self::Parse(_) => ErrorCode::InternalError,
        }
    }
}
