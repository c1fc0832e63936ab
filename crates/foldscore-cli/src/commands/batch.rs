use crate::cli::BatchArgs;
use crate::config::build_prediction_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crate::utils::{input, output};
use foldscore::core::analyzer::ProtParamAnalyzer;
use foldscore::workflows::batch::predict_batch;
use tracing::{info, warn};

pub fn run(args: BatchArgs, quiet: bool) -> Result<()> {
    let config = build_prediction_config(&args.config)?;
    let sequences = input::read_sequence_list(&args.input)?;
    if sequences.is_empty() {
        return Err(CliError::Argument(format!(
            "No sequences found in '{}'",
            args.input.display()
        )));
    }
    info!(count = sequences.len(), path = %args.input.display(), "Loaded sequences.");

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = progress_handler.reporter();

    let results = predict_batch(&sequences, &config, &ProtParamAnalyzer::new(), &reporter);

    let failed = results.iter().filter(|r| r.is_error()).count();
    if failed > 0 {
        warn!(failed, total = results.len(), "Some sequences failed validation.");
    }

    output::write_json(&results, args.output.as_deref(), args.pretty)?;
    Ok(())
}
