use super::predict::{PredictionResult, predict_with_noise};
use crate::core::analyzer::PhysicochemicalAnalyzer;
use crate::engine::config::{NoiseMode, PredictionConfig};
use crate::engine::noise::NoiseSource;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Noise source for the `index`-th request of a batch.
///
/// Seeded batches derive one seed per request, so each result is reproducible
/// regardless of the order in which workers pick requests up.
pub fn noise_for_request(mode: NoiseMode, index: usize) -> NoiseSource {
    match mode {
        NoiseMode::Seeded(seed) => NoiseSource::seeded(seed.wrapping_add(index as u64)),
        other => NoiseSource::from_mode(other),
    }
}

/// Predicts every sequence independently, returning results in input order.
#[instrument(skip_all, name = "batch_prediction_workflow", fields(count = sequences.len()))]
pub fn predict_batch<S>(
    sequences: &[S],
    config: &PredictionConfig,
    analyzer: &dyn PhysicochemicalAnalyzer,
    reporter: &ProgressReporter,
) -> Vec<PredictionResult>
where
    S: AsRef<str> + Sync,
{
    reporter.report(Progress::PhaseStart { name: "Prediction" });
    reporter.report(Progress::TaskStart {
        total_steps: sequences.len() as u64,
    });
    info!(count = sequences.len(), "Starting batch prediction.");

    #[cfg(not(feature = "parallel"))]
    let iterator = sequences.iter().enumerate();

    #[cfg(feature = "parallel")]
    let iterator = sequences.par_iter().enumerate();

    let results: Vec<PredictionResult> = iterator
        .map(|(index, raw)| {
            let mut noise = noise_for_request(config.noise, index);
            let result = predict_with_noise(raw.as_ref(), config, analyzer, &mut noise);
            reporter.report(Progress::TaskIncrement);
            result
        })
        .collect();

    let failed = results.iter().filter(|r| r.is_error()).count();
    if failed > 0 {
        reporter.message(format!(
            "{} of {} sequences failed validation",
            failed,
            results.len()
        ));
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        succeeded = results.len() - failed,
        failed, "Batch prediction complete."
    );
    results
}
