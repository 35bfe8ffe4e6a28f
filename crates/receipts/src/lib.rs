//! Receipt scoring domain module.
//!
//! This crate contains the receipt model and the points rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod receipt;
pub mod scoring;

pub use receipt::{Item, Receipt};
pub use scoring::{PointsBreakdown, ScoreError, score, score_breakdown};
