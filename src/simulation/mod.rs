//! Simulation engine and population state.
//!
//! This module provides the double-buffered population state, the
//! configuration surface, and the transmission engine that advances a
//! population generation by generation.

pub mod engine;
pub mod parameters;
pub mod population;

pub use engine::{Simulation, TransmissionAlgorithm};
pub use parameters::SimulationConfig;
pub use population::Population;
