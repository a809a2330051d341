//! Application handlers.
//!
//! Handlers that drive a comparison session through its ports.

pub mod comparison;

pub use comparison::{SubmitComparisonsHandler, SubmitComparisonsResult};
