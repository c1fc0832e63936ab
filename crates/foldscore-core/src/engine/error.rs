use super::config::ConfigError;
use super::plot::RenderError;
use crate::core::analyzer::AnalyzerError;
use crate::core::sequence::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid sequence: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Physicochemical analysis failed: {source}")]
    Analyzer {
        #[from]
        source: AnalyzerError,
    },

    #[error("Energy plot rendering failed: {source}")]
    Render {
        #[from]
        source: RenderError,
    },
}
