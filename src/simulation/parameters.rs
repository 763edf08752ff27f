//! Simulation parameters and configuration.
//!
//! This module provides the configuration structure for transmission
//! simulations. All parameters are validated eagerly at construction, never
//! lazily during a step.

use crate::errors::SimulationError;
use serde::{Deserialize, Serialize};

/// Configuration for a transmission simulation.
///
/// Immutable once constructed; the population's buffer shapes are fixed by
/// `popsize` and `numloci` for the lifetime of the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of individuals in the population
    pub popsize: usize,
    /// Number of independent trait dimensions (loci) per individual
    pub numloci: usize,
    /// Number of distinct trait ids present at generation 0
    pub inittraits: u32,
    /// Innovation rate per individual per generation; the per-step number of
    /// innovation events is Poisson with mean `popsize * innovation_rate`
    pub innovation_rate: f64,
    /// Optional RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a new validated configuration.
    ///
    /// # Errors
    /// Returns `SimulationError::Configuration` naming the offending
    /// parameter if `popsize`, `numloci`, or `inittraits` is zero, or if
    /// `innovation_rate` is negative or not finite.
    pub fn new(
        popsize: usize,
        numloci: usize,
        inittraits: u32,
        innovation_rate: f64,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if popsize == 0 {
            return Err(SimulationError::Configuration {
                parameter: "popsize",
                value: popsize.to_string(),
            });
        }
        if numloci == 0 {
            return Err(SimulationError::Configuration {
                parameter: "numloci",
                value: numloci.to_string(),
            });
        }
        if inittraits == 0 {
            return Err(SimulationError::Configuration {
                parameter: "inittraits",
                value: inittraits.to_string(),
            });
        }
        if !(innovation_rate >= 0.0 && innovation_rate.is_finite()) {
            return Err(SimulationError::Configuration {
                parameter: "innovation_rate",
                value: innovation_rate.to_string(),
            });
        }

        Ok(Self {
            popsize,
            numloci,
            inittraits,
            innovation_rate,
            seed,
        })
    }

    /// Create a drift-only configuration (innovation rate zero).
    pub fn neutral(
        popsize: usize,
        numloci: usize,
        inittraits: u32,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        Self::new(popsize, numloci, inittraits, 0.0, seed)
    }

    /// Total number of cells in one generation's trait matrix.
    #[inline]
    pub fn matrix_len(&self) -> usize {
        self.popsize * self.numloci
    }
}
