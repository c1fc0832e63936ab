use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use foldscore::core::sequence;

pub fn run(args: ValidateArgs) -> Result<()> {
    match describe(&args.sequence) {
        Ok(summary) => {
            println!("{}", summary);
            Ok(())
        }
        Err(reason) => {
            println!("invalid: {}", reason);
            Err(CliError::InvalidSequence(reason))
        }
    }
}

fn describe(raw: &str) -> std::result::Result<String, String> {
    sequence::check(raw)
        .map(|cleaned| format!("valid ({} residues)", cleaned.len()))
        .map_err(|e| e.to_string())
}
