//! Pairwise Engine - Pairwise Comparison & Consistency Workflow
//!
//! This crate collects pairwise importance judgments over a set of items,
//! keeps the comparison matrix reciprocal and complete, can suggest
//! judgments from product attributes, and submits the finished matrix to an
//! external weight solver that checks consistency.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
