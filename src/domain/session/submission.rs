//! Submission pipeline status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a session is in the submit/verdict cycle.
///
/// ```text
/// Idle ──► Processing ──► Success
///  ▲           │
///  │           ├──► Failure ──► Idle (explicit reset)
///  └───────────┘ (cancelled)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Processing,
    Success,
    Failure,
}

impl SubmissionStatus {
    /// Judgments may be edited.
    pub fn allows_edits(&self) -> bool {
        matches!(self, Self::Idle | Self::Failure)
    }
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Idle, Processing)
                | (Processing, Success)
                | (Processing, Failure)
                | (Processing, Idle)
                | (Failure, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Idle => vec![Processing],
            Processing => vec![Success, Failure, Idle],
            Failure => vec![Idle],
            Success => vec![],
        }
    }
}

/// Why a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request never produced a readable verdict.
    Transport,
    /// The solver answered with an explicit error.
    Solver,
    /// The solver judged the matrix inconsistent.
    Inconsistent,
}

/// Details of the last failed submission, for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionFailure {
    pub kind: FailureKind,
    pub message: String,
    /// Dimension the solver blamed, if it narrowed it down.
    pub failed_dimension: Option<String>,
    pub consistency_ratio: Option<f64>,
}
