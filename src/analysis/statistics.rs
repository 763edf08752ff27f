//! Derived diversity statistics.
//!
//! Functions deriving per-locus diversity metrics from a frequency table.
//! Everything here is a pure function of one table snapshot; nothing touches
//! population state directly, so new metrics can be added without changing
//! the tabulator's contract.

use crate::analysis::TraitFrequencies;
use serde::Serialize;

/// Per-locus statistics derived from one frequency table.
#[derive(Debug, Clone, Serialize)]
pub struct TraitStatistics {
    /// Number of distinct trait ids with nonzero count, per locus
    richness: Vec<u32>,
}

impl TraitStatistics {
    /// Number of loci covered.
    #[inline]
    pub fn numloci(&self) -> usize {
        self.richness.len()
    }

    /// Richness (count of distinct trait ids present) per locus.
    #[inline]
    pub fn richness(&self) -> &[u32] {
        &self.richness
    }

    /// Mean richness across loci.
    pub fn mean_richness(&self) -> f64 {
        if self.richness.is_empty() {
            return 0.0;
        }
        self.richness.iter().map(|&r| f64::from(r)).sum::<f64>() / self.richness.len() as f64
    }
}

/// Calculate per-locus trait statistics from a frequency table.
///
/// O(numloci × table width): for each locus, counts the trait ids with
/// nonzero occurrence.
pub fn calculate_trait_statistics(table: &TraitFrequencies) -> TraitStatistics {
    let richness = (0..table.numloci())
        .map(|locus| table.row(locus).iter().filter(|&&c| c > 0).count() as u32)
        .collect();

    TraitStatistics { richness }
}

/// Shannon diversity (entropy, in nats) per locus.
///
/// `H = -Σ p_i ln p_i` over the trait ids present at the locus, where `p_i`
/// is the frequency of trait id `i`. Zero when a single trait is fixed.
pub fn shannon_diversity(table: &TraitFrequencies) -> Vec<f64> {
    (0..table.numloci())
        .map(|locus| {
            let total = table.total(locus) as f64;
            table
                .row(locus)
                .iter()
                .filter(|&&c| c > 0)
                .map(|&c| {
                    let p = f64::from(c) / total;
                    -p * p.ln()
                })
                .sum()
        })
        .collect()
}
