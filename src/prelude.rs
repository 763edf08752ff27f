//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use ctmodels::prelude::*;
//!
//! let config = SimulationConfig::new(100, 4, 10, 0.01, Some(42)).unwrap();
//! let mut sim = Simulation::new(config).unwrap();
//! sim.run_for(50, TransmissionAlgorithm::WrightFisherInfiniteAlleles);
//!
//! let table = tabulate(sim.population()).unwrap();
//! let stats = calculate_trait_statistics(&table);
//! assert_eq!(stats.numloci(), 4);
//! ```

pub use crate::analysis::{
    calculate_trait_statistics, shannon_diversity, tabulate, TraitFrequencies, TraitStatistics,
};
pub use crate::errors::SimulationError;
pub use crate::random::{ParallelUniformSource, VariateSource};
pub use crate::simulation::{Population, Simulation, SimulationConfig, TransmissionAlgorithm};
