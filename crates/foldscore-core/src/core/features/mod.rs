//! # Feature Extraction
//!
//! Deterministic descriptors derived from a cleaned sequence and the residue tables.
//! Every function here is pure and total: an empty sequence yields a neutral value
//! (zero, or the documented neutral constant) rather than an error.
//!
//! - [`properties`] - Scalar means (hydropathy, volume, flexibility, pI) and charge balance
//! - [`composition`] - Per-residue composition and overlapping category distribution
//! - [`structure`] - Secondary-structure and disorder tendencies
//! - [`thermo`] - Thermostability indicators
//!
//! [`FeatureBundle::extract`] runs all of them and applies the presentation rounding
//! used in prediction results.

pub mod composition;
pub mod properties;
pub mod structure;
pub mod thermo;

use crate::core::sequence::CleanedSequence;
use composition::{CategoryDistribution, Composition};
use serde::Serialize;
use structure::SecondaryStructureTendency;
use thermo::ThermostabilityIndicators;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureBundle {
    pub hydrophobicity: f64,
    pub charge_balance: f64,
    pub amino_acid_composition: Composition,
    pub amino_acid_distribution: CategoryDistribution,
    pub average_volume: f64,
    pub flexibility_index: f64,
    pub isoelectric_point: f64,
    pub secondary_structure_tendency: SecondaryStructureTendency,
    pub disorder_tendency: f64,
    pub thermostability_indicators: ThermostabilityIndicators,
}

impl FeatureBundle {
    pub fn extract(sequence: &CleanedSequence) -> Self {
        Self {
            hydrophobicity: round_to(properties::hydrophobicity(sequence), 3),
            charge_balance: round_to(properties::charge_balance(sequence), 3),
            amino_acid_composition: composition::composition(sequence),
            amino_acid_distribution: composition::category_distribution(sequence),
            average_volume: round_to(properties::average_volume(sequence), 2),
            flexibility_index: round_to(properties::flexibility(sequence), 3),
            isoelectric_point: round_to(properties::isoelectric_point(sequence), 2),
            secondary_structure_tendency: structure::secondary_structure_tendency(sequence),
            disorder_tendency: structure::disorder_tendency(sequence),
            thermostability_indicators: thermo::thermostability_indicators(sequence),
        }
    }

    /// The bundle of an empty sequence, used where no valid input exists.
    pub fn neutral() -> Self {
        Self::extract(&CleanedSequence::default())
    }
}

impl Default for FeatureBundle {
    fn default() -> Self {
        Self::neutral()
    }
}
