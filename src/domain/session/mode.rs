//! Evaluation mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How judgments are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// The user enters every judgment.
    #[default]
    Manual,
    /// Judgments come from the auto-suggest heuristic.
    Auto,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => f.write_str("manual"),
            Self::Auto => f.write_str("auto"),
        }
    }
}
