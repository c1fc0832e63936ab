use crate::core::analyzer::{
    PhysicochemicalAnalyzer, PhysicochemicalSummary, ProtParamAnalyzer, summarize_or_fallback,
};
use crate::core::features::{FeatureBundle, round_to};
use crate::core::sequence::{self, CleanedSequence, ValidationError};
use crate::engine::config::PredictionConfig;
use crate::engine::energy_path::{self, EnergyPath};
use crate::engine::error::EngineError;
use crate::engine::noise::NoiseSource;
use crate::engine::plot::render_energy_plot;
use crate::engine::scoring::StabilityScorer;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// The complete output record of one prediction.
///
/// On failure `error` holds the validation reason and every other field carries
/// its zero or neutral value, so consumers can render it without special cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub sequence_length: usize,
    pub stability_score: f64,
    pub energy_plot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_profile: Option<EnergyPath>,
    pub molecular_weight: f64,
    pub instability_index: f64,
    #[serde(flatten)]
    pub features: FeatureBundle,
}

impl PredictionResult {
    pub fn from_error(error: &ValidationError) -> Self {
        Self {
            error: Some(error.to_string()),
            sequence_length: 0,
            stability_score: 0.0,
            energy_plot: String::new(),
            energy_profile: None,
            molecular_weight: 0.0,
            instability_index: 0.0,
            features: FeatureBundle::neutral(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

struct Analysis {
    summary: PhysicochemicalSummary,
    stability_score: f64,
    path: EnergyPath,
}

fn analyze(
    sequence: &CleanedSequence,
    config: &PredictionConfig,
    analyzer: &dyn PhysicochemicalAnalyzer,
    noise: &mut NoiseSource,
) -> Analysis {
    let summary = summarize_or_fallback(analyzer, sequence);
    // The score consumes the first draw; the energy path follows.
    let stability_score = StabilityScorer::new(&config.scoring).score(sequence, &summary, noise);
    let path = energy_path::synthesize(sequence, noise);
    Analysis {
        summary,
        stability_score,
        path,
    }
}

fn assemble(sequence: &CleanedSequence, analysis: Analysis, energy_plot: String) -> PredictionResult {
    PredictionResult {
        error: None,
        sequence_length: sequence.len(),
        stability_score: analysis.stability_score,
        energy_plot,
        energy_profile: Some(analysis.path),
        molecular_weight: round_to(analysis.summary.molecular_weight, 2),
        instability_index: round_to(analysis.summary.instability_index, 2),
        features: FeatureBundle::extract(sequence),
    }
}

/// Runs the full pipeline on a raw sequence. Never fails: validation problems are
/// reported through [`PredictionResult::error`] and rendering problems leave the
/// plot empty.
pub fn predict(
    raw: &str,
    config: &PredictionConfig,
    analyzer: &dyn PhysicochemicalAnalyzer,
) -> PredictionResult {
    let mut noise = NoiseSource::from_mode(config.noise);
    predict_with_noise(raw, config, analyzer, &mut noise)
}

/// Like [`predict`], drawing every stochastic term from the supplied `noise`.
#[instrument(skip_all, name = "prediction_workflow", fields(raw_length = raw.len()))]
pub fn predict_with_noise(
    raw: &str,
    config: &PredictionConfig,
    analyzer: &dyn PhysicochemicalAnalyzer,
    noise: &mut NoiseSource,
) -> PredictionResult {
    let sequence = match sequence::check(raw) {
        Ok(sequence) => sequence,
        Err(e) => {
            warn!(reason = %e, "Sequence rejected.");
            return PredictionResult::from_error(&e);
        }
    };

    let analysis = analyze(&sequence, config, analyzer, noise);
    let energy_plot = render_energy_plot(&analysis.path, &config.plot).unwrap_or_else(|e| {
        warn!(error = %e, "Energy plot rendering failed; leaving plot empty.");
        String::new()
    });

    let result = assemble(&sequence, analysis, energy_plot);
    info!(
        length = result.sequence_length,
        stability_score = result.stability_score,
        "Prediction complete."
    );
    result
}

/// Strict variant of [`predict`] that returns validation and rendering failures
/// as errors instead of folding them into the record.
#[instrument(skip_all, name = "strict_prediction_workflow")]
pub fn try_predict(
    raw: &str,
    config: &PredictionConfig,
    analyzer: &dyn PhysicochemicalAnalyzer,
    noise: &mut NoiseSource,
) -> Result<PredictionResult, EngineError> {
    let sequence = sequence::check(raw)?;
    let analysis = analyze(&sequence, config, analyzer, noise);
    let energy_plot = render_energy_plot(&analysis.path, &config.plot)?;
    Ok(assemble(&sequence, analysis, energy_plot))
}

/// Convenience front-end bundling a configuration with the built-in analyzer.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    config: PredictionConfig,
    analyzer: ProtParamAnalyzer,
}

impl Predictor {
    pub fn new(config: PredictionConfig) -> Self {
        Self {
            config,
            analyzer: ProtParamAnalyzer::new(),
        }
    }

    pub fn predict(&self, raw: &str) -> PredictionResult {
        predict(raw, &self.config, &self.analyzer)
    }

    /// Stability score alone; 0.0 for sequences that fail validation.
    pub fn stability_score(&self, raw: &str) -> f64 {
        let Ok(sequence) = sequence::check(raw) else {
            return 0.0;
        };
        let summary = summarize_or_fallback(&self.analyzer, &sequence);
        let mut noise = NoiseSource::from_mode(self.config.noise);
        StabilityScorer::new(&self.config.scoring).score(&sequence, &summary, &mut noise)
    }

    /// Energy path of the leading residues; empty for an unusable sequence.
    pub fn energy_path(&self, raw: &str) -> EnergyPath {
        let sequence = sequence::clean(raw);
        let mut noise = NoiseSource::from_mode(self.config.noise);
        energy_path::synthesize(&sequence, &mut noise)
    }
}
