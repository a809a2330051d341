//! Result handed to the next decision stage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DecisionContext;
use crate::domain::comparison::Item;
use crate::domain::foundation::{SessionId, Timestamp};

/// Weights produced by a successful submission.
///
/// Serializable so any storage collaborator can persist it for the
/// follow-on stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightHandoff {
    pub session_id: SessionId,
    pub items: Vec<Item>,
    /// Keyed by item label.
    pub weights: BTreeMap<String, f64>,
    pub consistency_ratio: f64,
    pub decision_context: DecisionContext,
    pub produced_at: Timestamp,
}

impl WeightHandoff {
    pub fn weight_of(&self, label: &str) -> Option<f64> {
        self.weights.get(label).copied()
    }
}
