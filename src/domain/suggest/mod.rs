//! Auto-suggest heuristic.
//!
//! Scores products on a dimension, turns score ratios into judgments on
//! the discrete scale, and writes them into a comparison matrix.

mod damping;
mod dimension;
mod errors;
mod heuristic;
pub mod quantize;
mod specs;

pub use damping::PriceDamping;
pub use dimension::{cpu_score, Dimension};
pub use errors::SuggestError;
pub use heuristic::AutoSuggest;
pub use quantize::ScaleStep;
pub use specs::ProductSpecs;
