//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, progress, errors, state machine)
//! - `comparison` - Items, pairs, judgment values, comparison matrix, traversal
//! - `suggest` - Attribute scoring and the auto-suggest heuristic
//! - `session` - Comparison session lifecycle and submission pipeline

pub mod comparison;
pub mod foundation;
pub mod session;
pub mod suggest;
