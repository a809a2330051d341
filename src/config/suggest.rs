//! Auto-suggest configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::suggest::PriceDamping;

/// Price gap thresholds for the auto-suggest heuristic, in currency units
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestConfig {
    /// Below this gap two prices count as equal
    #[serde(default = "default_near_equal")]
    pub near_equal_threshold: f64,

    /// Below this gap the ratio is held within [1/2, 2]
    #[serde(default = "default_small")]
    pub small_gap_threshold: f64,

    /// Below this gap the ratio is held within [1/3, 3]
    #[serde(default = "default_moderate")]
    pub moderate_gap_threshold: f64,
}

impl SuggestConfig {
    /// Thresholds as the heuristic's damping rule
    pub fn damping(&self) -> PriceDamping {
        PriceDamping::new(
            self.near_equal_threshold,
            self.small_gap_threshold,
            self.moderate_gap_threshold,
        )
    }

    /// Validate thresholds
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ascending = self.near_equal_threshold >= 0.0
            && self.near_equal_threshold < self.small_gap_threshold
            && self.small_gap_threshold < self.moderate_gap_threshold
            && self.moderate_gap_threshold.is_finite();
        if !ascending {
            return Err(ValidationError::InvalidThresholds);
        }
        Ok(())
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            near_equal_threshold: default_near_equal(),
            small_gap_threshold: default_small(),
            moderate_gap_threshold: default_moderate(),
        }
    }
}

fn default_near_equal() -> f64 {
    1_000_000.0
}

fn default_small() -> f64 {
    3_000_000.0
}

fn default_moderate() -> f64 {
    5_000_000.0
}
