//! Ctmodels: neutral cultural transmission simulation in finite populations.
//!
//! This library simulates Wright-Fisher transmission of discrete traits
//! across independent loci: each generation, every individual replaces its
//! trait vector by copying a uniformly chosen predecessor, optionally with
//! novel traits introduced at a stochastic rate under the infinite-alleles
//! model. It provides efficient double-buffered population state, bulk
//! pre-synchronized random variate generation, and frequency/diversity
//! observation of the evolving population.

pub mod analysis;
pub mod errors;
pub mod random;
pub mod simulation;

pub mod prelude;

// Re-export commonly used types for convenient external access.
//
// These form the public, stable surface most consumers use when configuring
// runs or analyzing results, available as `ctmodels::Simulation`,
// `ctmodels::TraitFrequencies`, etc.
pub use analysis::{calculate_trait_statistics, tabulate, TraitFrequencies, TraitStatistics};
pub use errors::SimulationError;
pub use random::{ParallelUniformSource, VariateSource};
pub use simulation::{Population, Simulation, SimulationConfig, TransmissionAlgorithm};
