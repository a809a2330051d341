//! Comparison session handlers.

mod submit_comparisons;

pub use submit_comparisons::{SubmitComparisonsHandler, SubmitComparisonsResult};
