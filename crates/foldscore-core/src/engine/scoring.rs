//! Multi-factor folding stability score.
//!
//! Six factors, each oriented so that 1.0 means "more stable", are combined with
//! fixed weights. A bounded uniform perturbation models estimator uncertainty; the
//! result is clamped to [0, 1] and rounded to three decimals.

use super::config::ScoringConfig;
use super::noise::NoiseSource;
use crate::core::analyzer::PhysicochemicalSummary;
use crate::core::features::{properties, round_to};
use crate::core::sequence::{self, CleanedSequence};
use tracing::{debug, instrument};

pub const IDEAL_LENGTH: f64 = 200.0;
pub const LENGTH_SCALE: f64 = 1000.0;
pub const HYDROPHOBICITY_SCALE: f64 = 5.0;
pub const INSTABILITY_SCALE: f64 = 100.0;
pub const IDEAL_MOLECULAR_WEIGHT: f64 = 25_000.0;
pub const MOLECULAR_WEIGHT_SCALE: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityFactors {
    pub length: f64,
    pub hydrophobicity: f64,
    pub charge: f64,
    pub instability: f64,
    pub aromaticity: f64,
    pub molecular_weight: f64,
}

impl StabilityFactors {
    pub fn compute(sequence: &CleanedSequence, summary: &PhysicochemicalSummary) -> Self {
        let length = sequence.len() as f64;
        let length_factor = if length > 0.0 {
            1.0 - (length - IDEAL_LENGTH).abs() / LENGTH_SCALE
        } else {
            0.0
        };
        Self {
            length: length_factor,
            hydrophobicity: 1.0
                - properties::hydrophobicity(sequence).abs() / HYDROPHOBICITY_SCALE,
            charge: 1.0 - properties::charge_balance(sequence),
            instability: (1.0 - summary.instability_index / INSTABILITY_SCALE).max(0.0),
            aromaticity: (summary.aromaticity * 2.0).min(1.0),
            molecular_weight: 1.0
                - (summary.molecular_weight - IDEAL_MOLECULAR_WEIGHT).abs()
                    / MOLECULAR_WEIGHT_SCALE,
        }
    }

    fn to_array(self) -> [f64; 6] {
        [
            self.length,
            self.hydrophobicity,
            self.charge,
            self.instability,
            self.aromaticity,
            self.molecular_weight,
        ]
    }

    pub fn weighted_sum(&self, config: &ScoringConfig) -> f64 {
        config
            .weights
            .to_array()
            .iter()
            .zip(self.to_array())
            .map(|(w, f)| w * f)
            .sum()
    }
}

pub struct StabilityScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> StabilityScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Scores a cleaned sequence, returning 0.0 for sequences that fail validation.
    #[instrument(level = "debug", skip_all, fields(length = sequence.len()))]
    pub fn score(
        &self,
        sequence: &CleanedSequence,
        summary: &PhysicochemicalSummary,
        noise: &mut NoiseSource,
    ) -> f64 {
        if sequence::validate(sequence.as_str()).is_err() {
            return 0.0;
        }

        let factors = StabilityFactors::compute(sequence, summary);
        let raw = factors.weighted_sum(self.config);
        let perturbation = noise.symmetric(self.config.perturbation_amplitude);
        let score = round_to((raw + perturbation).clamp(0.0, 1.0), 3);

        debug!(?factors, raw, perturbation, score, "Stability score computed.");
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::{PhysicochemicalAnalyzer, ProtParamAnalyzer};
    use crate::core::sequence::clean;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn summary(
        instability_index: f64,
        aromaticity: f64,
        molecular_weight: f64,
    ) -> PhysicochemicalSummary {
        PhysicochemicalSummary {
            instability_index,
            aromaticity,
            molecular_weight,
        }
    }

    #[test]
    fn factors_follow_their_formulas() {
        let seq = clean("KKKKKKKKKK");
        let factors = StabilityFactors::compute(&seq, &summary(30.0, 0.2, 30_000.0));
        assert!(f64_approx_equal(factors.length, 1.0 - 190.0 / 1000.0));
        assert!(f64_approx_equal(factors.hydrophobicity, 1.0 - 3.9 / 5.0));
        assert!(f64_approx_equal(factors.charge, 0.0));
        assert!(f64_approx_equal(factors.instability, 0.7));
        assert!(f64_approx_equal(factors.aromaticity, 0.4));
        assert!(f64_approx_equal(factors.molecular_weight, 0.95));
    }

    #[test]
    fn instability_and_aromaticity_factors_are_bounded() {
        let seq = clean("AAAAA");
        let factors = StabilityFactors::compute(&seq, &summary(250.0, 0.9, 25_000.0));
        assert_eq!(factors.instability, 0.0);
        assert_eq!(factors.aromaticity, 1.0);
        assert_eq!(factors.molecular_weight, 1.0);
    }

    #[test]
    fn deterministic_score_is_the_rounded_weighted_sum() {
        let config = ScoringConfig::default();
        let seq = clean("KKKKKKKKKK");
        let stats = summary(30.0, 0.2, 30_000.0);
        let expected = 0.2 * 0.81 + 0.2 * 0.22 + 0.15 * 0.0 + 0.2 * 0.7 + 0.1 * 0.4 + 0.15 * 0.95;
        let factors = StabilityFactors::compute(&seq, &stats);
        assert!((factors.weighted_sum(&config) - expected).abs() < 1e-9);

        let score = StabilityScorer::new(&config).score(&seq, &stats, &mut NoiseSource::disabled());
        assert_eq!(score, round_to(factors.weighted_sum(&config), 3));
    }

    #[test]
    fn perturbation_stays_within_documented_band() {
        let config = ScoringConfig::default();
        let seq = clean("MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQ");
        let stats = ProtParamAnalyzer.analyze(&seq).unwrap();
        let scorer = StabilityScorer::new(&config);
        let baseline = scorer.score(&seq, &stats, &mut NoiseSource::disabled());
        for seed in 0..200 {
            let score = scorer.score(&seq, &stats, &mut NoiseSource::seeded(seed));
            assert!((0.0..=1.0).contains(&score));
            assert!((score - baseline).abs() <= 0.05 + 1e-3, "seed {} drifted", seed);
        }
    }

    #[test]
    fn seeded_scores_are_reproducible() {
        let config = ScoringConfig::default();
        let seq = clean("ACDEFGHIKLMNPQRSTVWY");
        let stats = ProtParamAnalyzer.analyze(&seq).unwrap();
        let scorer = StabilityScorer::new(&config);
        let a = scorer.score(&seq, &stats, &mut NoiseSource::seeded(11));
        let b = scorer.score(&seq, &stats, &mut NoiseSource::seeded(11));
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_sequences_score_zero() {
        let config = ScoringConfig::default();
        let scorer = StabilityScorer::new(&config);
        let stats = PhysicochemicalSummary::fallback(4);
        assert_eq!(scorer.score(&clean("ACDE"), &stats, &mut NoiseSource::seeded(1)), 0.0);
        assert_eq!(scorer.score(&clean("ACDEZZ"), &stats, &mut NoiseSource::seeded(1)), 0.0);
        assert_eq!(scorer.score(&clean(""), &stats, &mut NoiseSource::seeded(1)), 0.0);
    }

    #[test]
    fn score_is_clamped_to_unit_interval() {
        let config = ScoringConfig {
            perturbation_amplitude: 0.5,
            ..ScoringConfig::default()
        };
        let seq = clean("AAAAA");
        let scorer = StabilityScorer::new(&config);
        for seed in 0..100 {
            let stats = summary(0.0, 1.0, 25_000.0);
            let score = scorer.score(&seq, &stats, &mut NoiseSource::seeded(seed));
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
