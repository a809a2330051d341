//! A recorded judgment on one pair.

use serde::Serialize;

use super::{ItemId, JudgmentValue};

/// The canonical record for a pair: how strongly `favored` wins.
///
/// The opposite direction is always derived as `1 / value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Judgment {
    pub value: JudgmentValue,
    pub favored: ItemId,
}

impl Judgment {
    pub fn new(value: JudgmentValue, favored: ItemId) -> Self {
        Self { value, favored }
    }

    /// The judgment's value as seen from `item`.
    ///
    /// Callers must pass one of the pair's two items.
    pub fn value_from(&self, item: &ItemId) -> f64 {
        if item == &self.favored {
            self.value.magnitude()
        } else {
            self.value.reciprocal()
        }
    }
}
