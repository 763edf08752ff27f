//! Transmission engine for population evolution.
//!
//! This module provides the engine that advances a population one generation
//! at a time under Wright-Fisher copying, with or without infinite-alleles
//! innovation.

use crate::random::{ParallelUniformSource, VariateSource};
use crate::simulation::{Population, SimulationConfig};
use crate::errors::SimulationError;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Which transmission rule a step applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransmissionAlgorithm {
    /// Pure drift: every individual copies a uniformly chosen predecessor.
    BasicWrightFisher,
    /// Drift plus infinite-alleles innovation at a Poisson rate.
    WrightFisherInfiniteAlleles,
}

/// Main simulation engine.
///
/// Owns the population, the bulk variate source, and a dedicated generator
/// for the sequential draws (innovation counts and targets). Construction
/// initializes the population, so every step runs on a `Ready` state and the
/// step methods cannot fail; the caller decides how many steps to run.
///
/// All randomness a step consumes is drawn through bulk, pre-synchronized
/// calls before the parallel copy phase begins; the copy itself is a pure
/// data-parallel map with one writer per destination row, so the partition
/// of rows across workers never affects the outcome.
#[derive(Debug)]
pub struct Simulation {
    /// Double-buffered population state
    population: Population,
    /// Bulk generator for donor indices and initial traits
    source: ParallelUniformSource,
    /// Generator for the sequential innovation draws
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a new simulation and seed its initial population.
    ///
    /// With `config.seed` set, the whole run is deterministic; otherwise all
    /// generators start from fresh OS entropy. The bulk source and the
    /// sequential generator get independent streams derived from one master
    /// seed, so their draws never overlap.
    ///
    /// # Errors
    /// Returns `SimulationError` if the population cannot be initialized.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let mut master = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        let mut source = ParallelUniformSource::seeded(master.random());
        let rng = Xoshiro256PlusPlus::seed_from_u64(master.random());

        let mut population = Population::new(config);
        population.initialize(&mut source)?;

        Ok(Self {
            population,
            source,
            rng,
        })
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Advance one generation of pure Wright-Fisher drift.
    ///
    /// Swaps the generation buffers, draws `popsize` donor indices in one
    /// bulk call, then copies each donor's whole trait vector into its
    /// destination row in parallel. A donor may be chosen zero, one, or many
    /// times (sampling with replacement).
    pub fn step_basic_wf(&mut self) {
        self.copy_phase();
        self.population.increment_generation();
    }

    /// Advance one generation of Wright-Fisher drift with infinite-alleles
    /// innovation.
    ///
    /// Identical to [`step_basic_wf`](Self::step_basic_wf), then draws the
    /// number of innovation events from Poisson(popsize × innovation_rate)
    /// and applies them sequentially: each event picks a uniform individual
    /// and locus and assigns that locus's next unissued trait id. If two
    /// events hit the same cell in one step, the second overwrites the
    /// first; both consumed ids stay permanently issued.
    pub fn step_wfia(&mut self) {
        self.copy_phase();

        let popsize = self.population.popsize();
        let numloci = self.population.numloci();
        let num_mutations = self.draw_mutation_count();

        // Sequential on purpose: each event reads and advances a shared
        // per-locus counter.
        for _ in 0..num_mutations {
            let indiv = self.rng.random_range(0..popsize);
            let locus = self.rng.random_range(0..numloci);
            self.population.innovate_at(indiv, locus);
        }

        self.population.increment_generation();
    }

    /// Advance one generation under the given algorithm.
    pub fn step(&mut self, algorithm: TransmissionAlgorithm) {
        match algorithm {
            TransmissionAlgorithm::BasicWrightFisher => self.step_basic_wf(),
            TransmissionAlgorithm::WrightFisherInfiniteAlleles => self.step_wfia(),
        }
    }

    /// Run the given algorithm for a number of generations.
    pub fn run_for(&mut self, generations: usize, algorithm: TransmissionAlgorithm) {
        for _ in 0..generations {
            self.step(algorithm);
        }
    }

    /// Shared sub-step: swap buffers, bulk-draw donors, parallel row copy.
    fn copy_phase(&mut self) {
        let popsize = self.population.popsize();
        let numloci = self.population.numloci();

        self.population.swap_buffers();

        // One donor per destination individual, all drawn before any
        // parallel writes happen.
        let donors = self.source.uniform_batch(0, popsize as u32, popsize);

        let (current, previous) = self.population.buffers_mut();
        current
            .par_chunks_mut(numloci)
            .zip(donors.par_iter())
            .for_each(|(row, &donor)| {
                let start = donor as usize * numloci;
                row.copy_from_slice(&previous[start..start + numloci]);
            });
    }

    /// Number of innovation events this step.
    fn draw_mutation_count(&mut self) -> usize {
        let lambda = self.population.popsize() as f64 * self.population.config().innovation_rate;
        if lambda <= 0.0 {
            // Poisson(0) is identically zero, and rand_distr rejects λ = 0.
            return 0;
        }
        match Poisson::new(lambda) {
            Ok(poisson) => poisson.sample(&mut self.rng) as usize,
            Err(_) => 0,
        }
    }
}
