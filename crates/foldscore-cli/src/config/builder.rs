use super::file::{FileConfig, FileNoiseConfig, FileNoiseMode, FileWeights};
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use foldscore::engine::config::{
    self as core_config, NoiseMode, PredictionConfig, PredictionConfigBuilder, ScoringWeights,
};
use foldscore::engine::error::EngineError;
use std::str::FromStr;
use tracing::debug;

pub fn build_prediction_config(args: &ConfigArgs) -> Result<PredictionConfig> {
    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, &args.set_values)?;
    merge(file_config, args)
}

fn merge(mut file_config: FileConfig, args: &ConfigArgs) -> Result<PredictionConfig> {
    let scoring = file_config.scoring.take().unwrap_or_default();
    let plot = file_config.plot.take().unwrap_or_default();
    let noise_file = file_config.noise.take().unwrap_or_default();

    let weights = merge_weights(scoring.weights.unwrap_or_default());

    let noise = if args.deterministic {
        NoiseMode::Disabled
    } else if let Some(seed) = args.seed {
        NoiseMode::Seeded(seed)
    } else {
        resolve_noise(&noise_file)?
    };

    let plot_enabled = !args.no_plot && plot.enabled.unwrap_or(true);

    let mut builder = PredictionConfigBuilder::new()
        .weights(weights)
        .noise(noise)
        .plot_enabled(plot_enabled)
        .plot_size(
            plot.width.unwrap_or(core_config::DEFAULT_PLOT_WIDTH),
            plot.height.unwrap_or(core_config::DEFAULT_PLOT_HEIGHT),
        );
    if let Some(amplitude) = scoring.perturbation_amplitude {
        builder = builder.perturbation_amplitude(amplitude);
    }

    let config = builder.build().map_err(EngineError::from)?;
    debug!(?config, "Resolved prediction configuration.");
    Ok(config)
}

fn merge_weights(file_weights: FileWeights) -> [f64; 6] {
    let defaults = ScoringWeights::default();
    [
        file_weights.length.unwrap_or(defaults.length),
        file_weights.hydrophobicity.unwrap_or(defaults.hydrophobicity),
        file_weights.charge.unwrap_or(defaults.charge),
        file_weights.instability.unwrap_or(defaults.instability),
        file_weights.aromaticity.unwrap_or(defaults.aromaticity),
        file_weights.molecular_weight.unwrap_or(defaults.molecular_weight),
    ]
}

fn resolve_noise(noise: &FileNoiseConfig) -> Result<NoiseMode> {
    match (noise.mode, noise.seed) {
        (Some(FileNoiseMode::Disabled), _) => Ok(NoiseMode::Disabled),
        (Some(FileNoiseMode::Random), _) => Ok(NoiseMode::Random),
        (Some(FileNoiseMode::Seeded) | None, Some(seed)) => Ok(NoiseMode::Seeded(seed)),
        (Some(FileNoiseMode::Seeded), None) => Err(CliError::Config(
            "`noise.mode = \"seeded\"` requires `noise.seed`".to_string(),
        )),
        (None, None) => Ok(NoiseMode::Random),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        if let Some(weight) = key.strip_prefix("scoring.weights.") {
            let value = Some(parse_value(key, value_str, "float")?);
            let weights = config
                .scoring
                .get_or_insert_with(Default::default)
                .weights
                .get_or_insert_with(Default::default);
            match weight {
                "length" => weights.length = value,
                "hydrophobicity" => weights.hydrophobicity = value,
                "charge" => weights.charge = value,
                "instability" => weights.instability = value,
                "aromaticity" => weights.aromaticity = value,
                "molecular-weight" => weights.molecular_weight = value,
                _ => return Err(unsupported_key(key)),
            }
            continue;
        }

        match key {
            "scoring.perturbation-amplitude" => {
                config
                    .scoring
                    .get_or_insert_with(Default::default)
                    .perturbation_amplitude = Some(parse_value(key, value_str, "float")?);
            }
            "noise.mode" => {
                config.noise.get_or_insert_with(Default::default).mode =
                    Some(value_str.parse()?);
            }
            "noise.seed" => {
                config.noise.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "plot.enabled" => {
                config.plot.get_or_insert_with(Default::default).enabled =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            "plot.width" => {
                config.plot.get_or_insert_with(Default::default).width =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "plot.height" => {
                config.plot.get_or_insert_with(Default::default).height =
                    Some(parse_value(key, value_str, "integer")?);
            }
            _ => return Err(unsupported_key(key)),
        }
    }
    Ok(config)
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!("Unsupported configuration key for --set: '{}'", key))
}
