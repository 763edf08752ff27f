//! Trait frequency tabulation.
//!
//! Functions for counting trait occurrences per locus across the current
//! generation of a population.

use crate::errors::SimulationError;
use crate::simulation::Population;
use rayon::prelude::*;
use serde::Serialize;

/// A snapshot of trait counts per locus.
///
/// The counts form a rectangular array stored flat for performance, with loci
/// as rows and trait ids as columns, addressed as
/// `counts[locus * max_num_traits + trait_id]`. Every row spans the globally
/// largest issued-id range across all loci, so loci that never reached that
/// many distinct ids carry trailing zero cells. The uniform stride wastes
/// some memory at narrow loci in exchange for simple addressing and a
/// cache-friendly scan.
///
/// A table is an independent, caller-owned snapshot: tabulating again after
/// further steps produces a new table and never mutates an old one.
#[derive(Debug, Clone, Serialize)]
pub struct TraitFrequencies {
    /// Flat count matrix, `numloci * max_num_traits` cells
    counts: Vec<u32>,
    /// Number of loci (rows)
    numloci: usize,
    /// Row stride: one more than the largest trait id any cell can hold
    max_num_traits: usize,
}

impl TraitFrequencies {
    /// Number of loci in the table.
    #[inline]
    pub fn numloci(&self) -> usize {
        self.numloci
    }

    /// Row stride of the table (the trait-id dimension).
    #[inline]
    pub fn max_num_traits(&self) -> usize {
        self.max_num_traits
    }

    /// Occurrences of `trait_id` at `locus`.
    ///
    /// # Panics
    /// Panics if `locus >= numloci` or `trait_id >= max_num_traits`.
    #[inline]
    pub fn count(&self, locus: usize, trait_id: usize) -> u32 {
        assert!(locus < self.numloci && trait_id < self.max_num_traits);
        self.counts[locus * self.max_num_traits + trait_id]
    }

    /// The full count row for one locus.
    #[inline]
    pub fn row(&self, locus: usize) -> &[u32] {
        let start = locus * self.max_num_traits;
        &self.counts[start..start + self.max_num_traits]
    }

    /// Total count across all trait ids at `locus`. Always equals the
    /// population size the table was taken from.
    pub fn total(&self, locus: usize) -> u64 {
        self.row(locus).iter().map(|&c| u64::from(c)).sum()
    }
}

/// Tabulate trait frequencies for the current generation.
///
/// Single O(popsize × numloci) pass over the current trait matrix, run in
/// parallel across loci (each locus's count row has exactly one writer).
/// Consecutive calls with no intervening step produce identical tables.
///
/// # Errors
/// Returns `SimulationError::Uninitialized` if the population has not been
/// initialized.
pub fn tabulate(population: &Population) -> Result<TraitFrequencies, SimulationError> {
    population.ensure_initialized("tabulate trait frequencies")?;

    let popsize = population.popsize();
    let numloci = population.numloci();
    let width = population.table_width();
    let traits = population.current_traits();

    let mut counts = vec![0u32; numloci * width];
    counts
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(locus, row)| {
            for indiv in 0..popsize {
                let trait_id = traits[indiv * numloci + locus] as usize;
                row[trait_id] += 1;
            }
        });

    Ok(TraitFrequencies {
        counts,
        numloci,
        max_num_traits: width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{Simulation, SimulationConfig, TransmissionAlgorithm};

    fn sim(popsize: usize, numloci: usize, inittraits: u32, rate: f64, seed: u64) -> Simulation {
        let config = SimulationConfig::new(popsize, numloci, inittraits, rate, Some(seed)).unwrap();
        Simulation::new(config).unwrap()
    }

    #[test]
    fn test_tabulate_uninitialized_rejected() {
        let config = SimulationConfig::new(10, 2, 4, 0.0, None).unwrap();
        let pop = Population::new(config);
        assert!(tabulate(&pop).is_err());
    }

    #[test]
    fn test_counts_conserve_popsize() {
        let mut sim = sim(100, 3, 5, 0.1, 21);
        sim.run_for(20, TransmissionAlgorithm::WrightFisherInfiniteAlleles);

        let table = tabulate(sim.population()).unwrap();
        for locus in 0..table.numloci() {
            assert_eq!(table.total(locus), 100);
        }
    }

    #[test]
    fn test_table_shape() {
        let sim = sim(10, 4, 6, 0.0, 22);
        let table = tabulate(sim.population()).unwrap();

        assert_eq!(table.numloci(), 4);
        // Width is max(next_trait) = inittraits + 1 at generation 0; the
        // top bin is the id value generation 0 never uses.
        assert_eq!(table.max_num_traits(), 7);
        assert_eq!(table.row(0).len(), 7);
        for locus in 0..4 {
            assert_eq!(table.count(locus, 6), 0);
        }
    }

    #[test]
    fn test_counts_match_manual_scan() {
        let mut sim = sim(50, 2, 4, 0.0, 23);
        sim.run_for(5, TransmissionAlgorithm::BasicWrightFisher);

        let table = tabulate(sim.population()).unwrap();
        let pop = sim.population();

        for locus in 0..2 {
            for trait_id in 0..table.max_num_traits() {
                let expected = (0..50)
                    .filter(|&i| pop.trait_at(i, locus) == trait_id as u32)
                    .count() as u32;
                assert_eq!(table.count(locus, trait_id), expected);
            }
        }
    }

    #[test]
    fn test_tabulation_idempotent() {
        let mut sim = sim(40, 3, 4, 0.3, 24);
        sim.run_for(10, TransmissionAlgorithm::WrightFisherInfiniteAlleles);

        let first = tabulate(sim.population()).unwrap();
        let second = tabulate(sim.population()).unwrap();

        for locus in 0..first.numloci() {
            assert_eq!(first.row(locus), second.row(locus));
        }
    }

    #[test]
    fn test_width_covers_issued_ids() {
        let mut sim = sim(30, 2, 3, 1.0, 25);
        sim.run_for(50, TransmissionAlgorithm::WrightFisherInfiniteAlleles);

        // Largest observable id is max(next_trait) - 1; the stride must
        // cover it even for loci that issued fewer ids.
        let max_next = *sim.population().next_trait_ids().iter().max().unwrap();
        let table = tabulate(sim.population()).unwrap();
        assert_eq!(table.max_num_traits(), max_next as usize);
    }
}
