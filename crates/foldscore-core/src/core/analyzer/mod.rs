//! # Physicochemical Analyzer
//!
//! Whole-sequence statistics (instability index, aromaticity, molecular weight) are
//! supplied by an injected [`PhysicochemicalAnalyzer`]. Analyzer failures never reach
//! callers of the prediction pipeline: [`summarize_or_fallback`] absorbs them into
//! [`PhysicochemicalSummary::fallback`].
//!
//! Implementations shipped with the crate:
//!
//! - [`ProtParamAnalyzer`] - Built-in ProtParam-style statistics (the default)
//! - [`UnavailableAnalyzer`] - Always fails; stands in for a missing analysis backend

mod protparam;

pub use protparam::ProtParamAnalyzer;

use crate::core::sequence::CleanedSequence;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub const FALLBACK_INSTABILITY_INDEX: f64 = 50.0;
pub const FALLBACK_AROMATICITY: f64 = 0.1;
pub const FALLBACK_RESIDUE_MASS: f64 = 110.0;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Physicochemical analyzer is unavailable: {0}")]
    Unavailable(String),

    #[error("Cannot analyze an empty sequence")]
    EmptySequence,

    #[error("Residue '{0}' is not supported by the analyzer")]
    UnsupportedResidue(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicochemicalSummary {
    pub instability_index: f64,
    pub aromaticity: f64,
    pub molecular_weight: f64,
}

impl PhysicochemicalSummary {
    /// Substitute statistics used whenever the analyzer cannot produce a result.
    pub fn fallback(length: usize) -> Self {
        Self {
            instability_index: FALLBACK_INSTABILITY_INDEX,
            aromaticity: FALLBACK_AROMATICITY,
            molecular_weight: length as f64 * FALLBACK_RESIDUE_MASS,
        }
    }
}

pub trait PhysicochemicalAnalyzer: Send + Sync {
    fn analyze(&self, sequence: &CleanedSequence) -> Result<PhysicochemicalSummary, AnalyzerError>;
}

impl<A: PhysicochemicalAnalyzer + ?Sized> PhysicochemicalAnalyzer for &A {
    fn analyze(&self, sequence: &CleanedSequence) -> Result<PhysicochemicalSummary, AnalyzerError> {
        (**self).analyze(sequence)
    }
}

impl<A: PhysicochemicalAnalyzer + ?Sized> PhysicochemicalAnalyzer for Box<A> {
    fn analyze(&self, sequence: &CleanedSequence) -> Result<PhysicochemicalSummary, AnalyzerError> {
        (**self).analyze(sequence)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableAnalyzer;

impl PhysicochemicalAnalyzer for UnavailableAnalyzer {
    fn analyze(&self, _sequence: &CleanedSequence) -> Result<PhysicochemicalSummary, AnalyzerError> {
        Err(AnalyzerError::Unavailable(
            "no analysis backend configured".to_string(),
        ))
    }
}

pub fn summarize_or_fallback(
    analyzer: &dyn PhysicochemicalAnalyzer,
    sequence: &CleanedSequence,
) -> PhysicochemicalSummary {
    match analyzer.analyze(sequence) {
        Ok(summary) => summary,
        Err(e) => {
            warn!(
                error = %e,
                length = sequence.len(),
                "Physicochemical analysis failed; using fallback statistics."
            );
            PhysicochemicalSummary::fallback(sequence.len())
        }
    }
}
