//! Bulk random variate generation.
//!
//! All randomness consumed by a transmission step (donor indices, innovation
//! counts, innovation targets) is drawn through this module in bulk, before
//! any parallel write phase begins. Per-worker generators created ad hoc
//! inside parallel regions are not permitted anywhere in this crate.

mod source;

pub use source::{ParallelUniformSource, VariateSource};
