//! Resolution of the effective [`PredictionConfig`](foldscore::engine::config::PredictionConfig)
//! from a TOML file, `--set` overrides and command-line flags, in increasing order
//! of precedence.

mod builder;
mod file;

pub use builder::build_prediction_config;
