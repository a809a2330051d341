//! Application layer - Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The session aggregate owns every rule; handlers only sequence the calls
//! that cross a port.

pub mod handlers;

pub use handlers::{SubmitComparisonsHandler, SubmitComparisonsResult};
