use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileWeights {
    pub length: Option<f64>,
    pub hydrophobicity: Option<f64>,
    pub charge: Option<f64>,
    pub instability: Option<f64>,
    pub aromaticity: Option<f64>,
    pub molecular_weight: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileScoringConfig {
    pub weights: Option<FileWeights>,
    pub perturbation_amplitude: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileNoiseMode {
    Random,
    Seeded,
    Disabled,
}

impl std::str::FromStr for FileNoiseMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "seeded" => Ok(Self::Seeded),
            "disabled" | "deterministic" => Ok(Self::Disabled),
            other => Err(CliError::Config(format!(
                "Unknown noise mode '{}'. Expected one of: random, seeded, disabled.",
                other
            ))),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileNoiseConfig {
    pub mode: Option<FileNoiseMode>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilePlotConfig {
    pub enabled: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// On-disk configuration. Every field is optional; missing values fall back to
/// the library defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub scoring: Option<FileScoringConfig>,
    pub noise: Option<FileNoiseConfig>,
    pub plot: Option<FilePlotConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading configuration file.");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
