use super::round_to;
use crate::core::residues::{AminoAcid, ResidueCategory};
use crate::core::sequence::CleanedSequence;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResidueCount {
    pub count: usize,
    pub percentage: f64,
}

impl ResidueCount {
    fn of(count: usize, total: usize) -> Self {
        let percentage = if total > 0 {
            round_to(count as f64 / total as f64 * 100.0, 2)
        } else {
            0.0
        };
        Self { count, percentage }
    }
}

pub type Composition = BTreeMap<AminoAcid, ResidueCount>;
pub type CategoryDistribution = BTreeMap<ResidueCategory, ResidueCount>;

/// Count and percentage of each canonical residue; absent residues report zero.
pub fn composition(sequence: &CleanedSequence) -> Composition {
    let total = sequence.len();
    let mut counts = [0usize; 20];
    for residue in sequence.amino_acids() {
        counts[residue.index()] += 1;
    }
    AminoAcid::ALL
        .iter()
        .map(|&aa| (aa, ResidueCount::of(counts[aa.index()], total)))
        .collect()
}

pub fn category_distribution(sequence: &CleanedSequence) -> CategoryDistribution {
    let total = sequence.len();
    ResidueCategory::ALL
        .iter()
        .map(|&category| {
            let count = sequence.codes().filter(|&c| category.contains(c)).count();
            (category, ResidueCount::of(count, total))
        })
        .collect()
}
