//! Double-buffered population state.
//!
//! This module provides the `Population` structure holding the trait matrices
//! for the current and previous generations, plus the per-locus counters that
//! issue novel trait ids.

use crate::errors::SimulationError;
use crate::random::VariateSource;
use crate::simulation::SimulationConfig;

/// Trait state for a population of individuals.
///
/// An individual is a row index; it carries no identity beyond its trait
/// vector. The two generation buffers are equally shaped, row-major flat
/// matrices addressed as `indiv * numloci + locus`, and are allocated once by
/// [`initialize`](Population::initialize) and never resized. Instead of
/// swapping raw pointers, a step toggles which buffer is "current"; the other
/// buffer is the read-only snapshot of the previous generation.
#[derive(Debug, Clone)]
pub struct Population {
    /// Immutable configuration
    config: SimulationConfig,
    /// The two generation buffers; `current` indexes into this array
    traits: [Vec<u32>; 2],
    /// Which buffer holds the most recently completed generation
    current: usize,
    /// Per-locus id to hand out for the next innovation. Initialized to
    /// `inittraits + 1`, one above the highest id assignable at generation 0,
    /// so one id value per locus is issued but never used. This off-by-one is
    /// preserved from the original model's observed behavior.
    next_trait: Vec<u32>,
    /// Generation counter; 0 after initialization
    generation: usize,
    initialized: bool,
}

impl Population {
    /// Create an empty, uninitialized population for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            traits: [Vec::new(), Vec::new()],
            current: 0,
            next_trait: Vec::new(),
            generation: 0,
            initialized: false,
        }
    }

    /// Seed the population with random initial traits.
    ///
    /// Allocates both generation buffers, fills every cell of the current
    /// buffer with an id drawn uniformly from `[0, inittraits)` — one bulk
    /// batch of `popsize * numloci` draws, not per-cell calls — and copies
    /// the result into the previous buffer so that generation 0 has a
    /// defined predecessor equal to itself.
    ///
    /// # Errors
    /// Returns `SimulationError::AlreadyInitialized` if called twice.
    pub fn initialize<S: VariateSource>(&mut self, source: &mut S) -> Result<(), SimulationError> {
        if self.initialized {
            return Err(SimulationError::AlreadyInitialized);
        }

        let cells = source.uniform_batch(0, self.config.inittraits, self.config.matrix_len());
        self.traits[1] = cells.clone();
        self.traits[0] = cells;
        self.current = 0;

        self.next_trait = vec![self.config.inittraits + 1; self.config.numloci];
        self.generation = 0;
        self.initialized = true;
        Ok(())
    }

    /// Get the configuration this population was built with.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of individuals.
    #[inline]
    pub fn popsize(&self) -> usize {
        self.config.popsize
    }

    /// Number of loci per individual.
    #[inline]
    pub fn numloci(&self) -> usize {
        self.config.numloci
    }

    /// Get the current generation number (0 after initialization).
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether `initialize()` has completed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The current generation's trait matrix as a flat row-major slice.
    #[inline]
    pub fn current_traits(&self) -> &[u32] {
        &self.traits[self.current]
    }

    /// The previous generation's trait matrix as a flat row-major slice.
    #[inline]
    pub fn previous_traits(&self) -> &[u32] {
        &self.traits[1 - self.current]
    }

    /// Trait id carried by `indiv` at `locus` in the current generation.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn trait_at(&self, indiv: usize, locus: usize) -> u32 {
        assert!(indiv < self.config.popsize && locus < self.config.numloci);
        self.current_traits()[indiv * self.config.numloci + locus]
    }

    /// Per-locus counters of the next novel trait id to issue.
    #[inline]
    pub fn next_trait_ids(&self) -> &[u32] {
        &self.next_trait
    }

    /// Width of a frequency-table row: one more than the largest trait id
    /// that can appear in any cell, i.e. `max(next_trait)` across all loci.
    ///
    /// Every locus row is padded to this globally largest issued-id range,
    /// trading some memory at loci with fewer ids for a uniform stride.
    pub(crate) fn table_width(&self) -> usize {
        let max_next = self.next_trait.iter().copied().max().unwrap_or(1);
        max_next as usize
    }

    /// Check that the population is initialized before an operation.
    pub(crate) fn ensure_initialized(
        &self,
        operation: &'static str,
    ) -> Result<(), SimulationError> {
        if self.initialized {
            Ok(())
        } else {
            Err(SimulationError::Uninitialized { operation })
        }
    }

    /// Exchange the roles of the two buffers and zero-fill the new current.
    ///
    /// O(1) relabeling plus a fill; no trait data is copied. Zeroing
    /// guarantees that any cell missed by the subsequent copy phase reads as
    /// 0 instead of stale data from two generations ago.
    pub(crate) fn swap_buffers(&mut self) {
        self.current = 1 - self.current;
        self.traits[self.current].fill(0);
    }

    /// Split-borrow the buffers for the copy phase: mutable current,
    /// immutable previous.
    pub(crate) fn buffers_mut(&mut self) -> (&mut [u32], &[u32]) {
        let (first, second) = self.traits.split_at_mut(1);
        if self.current == 0 {
            (&mut first[0], &second[0])
        } else {
            (&mut second[0], &first[0])
        }
    }

    /// Assign a brand-new trait id to `indiv` at `locus` and advance that
    /// locus's counter. Returns the id issued.
    pub(crate) fn innovate_at(&mut self, indiv: usize, locus: usize) -> u32 {
        let id = self.next_trait[locus];
        self.next_trait[locus] += 1;
        let numloci = self.config.numloci;
        self.traits[self.current][indiv * numloci + locus] = id;
        id
    }

    pub(crate) fn increment_generation(&mut self) {
        self.generation += 1;
    }
}
