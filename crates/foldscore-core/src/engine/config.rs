use thiserror::Error;

pub const DEFAULT_FACTOR_WEIGHTS: [f64; 6] = [0.20, 0.20, 0.15, 0.20, 0.10, 0.15];
pub const DEFAULT_PERTURBATION_AMPLITUDE: f64 = 0.05;
pub const MAX_PERTURBATION_AMPLITUDE: f64 = 0.5;
pub const DEFAULT_PLOT_WIDTH: u32 = 800;
pub const DEFAULT_PLOT_HEIGHT: u32 = 400;
pub const MIN_PLOT_DIMENSION: u32 = 100;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Scoring weights must be finite, non-negative and sum to 1.0 (got {0:?})")]
    InvalidWeights([f64; 6]),

    #[error(
        "Perturbation amplitude must be within [0, {max}] (got {0})",
        max = MAX_PERTURBATION_AMPLITUDE
    )]
    InvalidAmplitude(f64),

    #[error(
        "Plot dimensions must be at least {min}x{min} pixels (got {0}x{1})",
        min = MIN_PLOT_DIMENSION
    )]
    InvalidPlotSize(u32, u32),
}

/// Weights of the six stability factors, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub length: f64,
    pub hydrophobicity: f64,
    pub charge: f64,
    pub instability: f64,
    pub aromaticity: f64,
    pub molecular_weight: f64,
}

impl ScoringWeights {
    pub fn from_array(weights: [f64; 6]) -> Self {
        let [length, hydrophobicity, charge, instability, aromaticity, molecular_weight] = weights;
        Self {
            length,
            hydrophobicity,
            charge,
            instability,
            aromaticity,
            molecular_weight,
        }
    }

    pub fn to_array(&self) -> [f64; 6] {
        [
            self.length,
            self.hydrophobicity,
            self.charge,
            self.instability,
            self.aromaticity,
            self.molecular_weight,
        ]
    }

    fn is_valid(&self) -> bool {
        let weights = self.to_array();
        let sum: f64 = weights.iter().sum();
        weights.iter().all(|w| w.is_finite() && *w >= 0.0)
            && (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::from_array(DEFAULT_FACTOR_WEIGHTS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub perturbation_amplitude: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            perturbation_amplitude: DEFAULT_PERTURBATION_AMPLITUDE,
        }
    }
}

/// How the stochastic terms of scoring and energy-path synthesis are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseMode {
    /// A fresh entropy-seeded generator for every prediction.
    #[default]
    Random,
    /// A generator seeded with the given value, for reproducible output.
    Seeded(u64),
    /// Every noise term is zero.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PredictionConfig {
    pub scoring: ScoringConfig,
    pub noise: NoiseMode,
    pub plot: PlotConfig,
}

impl PredictionConfig {
    /// Reproducible configuration with a fixed noise seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            noise: NoiseMode::Seeded(seed),
            ..Self::default()
        }
    }

    /// Configuration without any stochastic terms.
    pub fn deterministic() -> Self {
        Self {
            noise: NoiseMode::Disabled,
            ..Self::default()
        }
    }
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    weights: Option<[f64; 6]>,
    perturbation_amplitude: Option<f64>,
    noise: Option<NoiseMode>,
    plot_enabled: Option<bool>,
    plot_width: Option<u32>,
    plot_height: Option<u32>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weights(mut self, weights: [f64; 6]) -> Self {
        self.weights = Some(weights);
        self
    }
    pub fn perturbation_amplitude(mut self, amplitude: f64) -> Self {
        self.perturbation_amplitude = Some(amplitude);
        self
    }
    pub fn noise(mut self, mode: NoiseMode) -> Self {
        self.noise = Some(mode);
        self
    }
    pub fn plot_enabled(mut self, enabled: bool) -> Self {
        self.plot_enabled = Some(enabled);
        self
    }
    pub fn plot_size(mut self, width: u32, height: u32) -> Self {
        self.plot_width = Some(width);
        self.plot_height = Some(height);
        self
    }

    pub fn build(self) -> Result<PredictionConfig, ConfigError> {
        let weights = self.weights.unwrap_or(DEFAULT_FACTOR_WEIGHTS);
        let weights_typed = ScoringWeights::from_array(weights);
        if !weights_typed.is_valid() {
            return Err(ConfigError::InvalidWeights(weights));
        }

        let perturbation_amplitude = self
            .perturbation_amplitude
            .unwrap_or(DEFAULT_PERTURBATION_AMPLITUDE);
        if !perturbation_amplitude.is_finite()
            || !(0.0..=MAX_PERTURBATION_AMPLITUDE).contains(&perturbation_amplitude)
        {
            return Err(ConfigError::InvalidAmplitude(perturbation_amplitude));
        }

        let width = self.plot_width.unwrap_or(DEFAULT_PLOT_WIDTH);
        let height = self.plot_height.unwrap_or(DEFAULT_PLOT_HEIGHT);
        if width < MIN_PLOT_DIMENSION || height < MIN_PLOT_DIMENSION {
            return Err(ConfigError::InvalidPlotSize(width, height));
        }

        Ok(PredictionConfig {
            scoring: ScoringConfig {
                weights: weights_typed,
                perturbation_amplitude,
            },
            noise: self.noise.unwrap_or_default(),
            plot: PlotConfig {
                enabled: self.plot_enabled.unwrap_or(true),
                width,
                height,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let sum: f64 = ScoringWeights::default().to_array().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn builder_without_overrides_matches_default_config() {
        let config = PredictionConfigBuilder::new().build().unwrap();
        assert_eq!(config, PredictionConfig::default());
        assert_eq!(config.noise, NoiseMode::Random);
        assert_eq!(config.scoring.perturbation_amplitude, 0.05);
        assert!(config.plot.enabled);
    }

    #[test]
    fn builder_applies_all_overrides() {
        let config = PredictionConfigBuilder::new()
            .weights([0.5, 0.1, 0.1, 0.1, 0.1, 0.1])
            .perturbation_amplitude(0.0)
            .noise(NoiseMode::Seeded(7))
            .plot_enabled(false)
            .plot_size(640, 320)
            .build()
            .unwrap();
        assert_eq!(config.scoring.weights.length, 0.5);
        assert_eq!(config.scoring.perturbation_amplitude, 0.0);
        assert_eq!(config.noise, NoiseMode::Seeded(7));
        assert_eq!(
            config.plot,
            PlotConfig {
                enabled: false,
                width: 640,
                height: 320
            }
        );
    }

    #[test]
    fn builder_rejects_weights_not_summing_to_one() {
        let result = PredictionConfigBuilder::new()
            .weights([0.2, 0.2, 0.2, 0.2, 0.2, 0.2])
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
    }

    #[test]
    fn builder_rejects_negative_or_non_finite_weights() {
        for weights in [
            [1.2, -0.2, 0.0, 0.0, 0.0, 0.0],
            [f64::NAN, 0.2, 0.2, 0.2, 0.2, 0.2],
        ] {
            let result = PredictionConfigBuilder::new().weights(weights).build();
            assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
        }
    }

    #[test]
    fn builder_rejects_out_of_range_amplitude() {
        for amplitude in [-0.01, 0.51, f64::INFINITY] {
            let result = PredictionConfigBuilder::new()
                .perturbation_amplitude(amplitude)
                .build();
            assert!(matches!(result, Err(ConfigError::InvalidAmplitude(_))));
        }
    }

    #[test]
    fn builder_rejects_tiny_plots() {
        let result = PredictionConfigBuilder::new().plot_size(99, 400).build();
        assert_eq!(result, Err(ConfigError::InvalidPlotSize(99, 400)));
    }

    #[test]
    fn convenience_constructors_set_noise_mode() {
        assert_eq!(PredictionConfig::seeded(3).noise, NoiseMode::Seeded(3));
        assert_eq!(PredictionConfig::deterministic().noise, NoiseMode::Disabled);
    }
}
