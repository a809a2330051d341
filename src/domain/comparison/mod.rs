//! Comparison domain module.
//!
//! Items, the pairs generated over them, the judgment value codec, the
//! comparison matrix that stores one canonical judgment per pair, and the
//! cursor that walks the pairs in order.

mod errors;
mod item;
mod judgment;
mod matrix;
mod pair;
mod presets;
mod traversal;
mod value;

pub use errors::{ComparisonError, ValueError};
pub use item::{Item, ItemId, ItemSet};
pub use judgment::Judgment;
pub use matrix::ComparisonMatrix;
pub use pair::{ComparisonPair, PairGenerator};
pub use presets::{criteria_for_usage, Usage};
pub use traversal::{Advance, TraversalCursor};
pub use value::{fraction_presets, scale_presets, ImportancePreset, JudgmentValue};
