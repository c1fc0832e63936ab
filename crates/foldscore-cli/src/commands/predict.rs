use crate::cli::PredictArgs;
use crate::config::build_prediction_config;
use crate::error::{CliError, Result};
use crate::utils::{input, output};
use foldscore::core::analyzer::ProtParamAnalyzer;
use foldscore::workflows::predict::predict;
use tracing::{info, warn};

pub fn run(args: PredictArgs) -> Result<()> {
    let config = build_prediction_config(&args.config)?;
    let raw = input::resolve_sequence(args.sequence.as_deref(), args.input.as_deref())?;

    info!(raw_length = raw.len(), "Running prediction.");
    let result = predict(&raw, &config, &ProtParamAnalyzer::new());

    if let Some(path) = &args.plot_out {
        if result.energy_plot.is_empty() {
            warn!(path = %path.display(), "No energy plot was rendered; skipping plot output.");
        } else {
            std::fs::write(path, &result.energy_plot)?;
            info!(path = %path.display(), "Energy plot written.");
        }
    }

    output::write_json(&result, args.output.as_deref(), args.pretty)?;

    match result.error {
        Some(reason) => Err(CliError::InvalidSequence(reason)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ConfigArgs;
    use std::fs;
    use tempfile::tempdir;

    fn args(sequence: &str, dir: &tempfile::TempDir) -> PredictArgs {
        PredictArgs {
            sequence: Some(sequence.to_string()),
            input: None,
            output: Some(dir.path().join("result.json")),
            plot_out: Some(dir.path().join("energy.svg")),
            pretty: true,
            config: ConfigArgs {
                seed: Some(42),
                ..ConfigArgs::default()
            },
        }
    }

    #[test]
    fn writes_record_and_plot_files() {
        let dir = tempdir().unwrap();
        run(args("MKTAYIAKQRQISFVKSHFSRQ", &dir)).unwrap();

        let record: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("result.json")).unwrap())
                .unwrap();
        assert_eq!(record["sequence_length"], 22);
        let svg = fs::read_to_string(dir.path().join("energy.svg")).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn invalid_sequence_still_writes_error_record_but_fails() {
        let dir = tempdir().unwrap();
        let result = run(args("XYZ12", &dir));
        assert!(matches!(result, Err(CliError::InvalidSequence(_))));

        let record: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("result.json")).unwrap())
                .unwrap();
        assert!(record["error"].is_string());
        assert!(!dir.path().join("energy.svg").exists());
    }
}
