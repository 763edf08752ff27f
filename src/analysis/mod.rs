//! Observation of population state: frequency tabulation and statistics.
//!
//! The tabulator takes an immutable snapshot of trait counts per locus; the
//! statistics calculator derives per-locus diversity metrics from such a
//! snapshot. Both produce caller-owned value objects.

pub mod frequencies;
pub mod statistics;

pub use frequencies::{tabulate, TraitFrequencies};
pub use statistics::{calculate_trait_statistics, shannon_diversity, TraitStatistics};
