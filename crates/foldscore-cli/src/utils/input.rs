use crate::error::{CliError, Result};
use std::path::Path;

/// Reads a single sequence from a plain or FASTA file.
///
/// FASTA header lines (`>`) and comment lines (`#`) are dropped and the remaining
/// lines are concatenated; cleaning happens later in the library.
pub fn read_sequence_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    let sequence: String = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('>') && !line.starts_with('#'))
        .collect();
    Ok(sequence)
}

/// Reads one sequence per non-empty line, skipping `#` comment lines.
pub fn read_sequence_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_sequence_list(&content))
}

pub fn parse_sequence_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn resolve_sequence(sequence: Option<&str>, input: Option<&Path>) -> Result<String> {
    match (sequence, input) {
        (Some(seq), _) => Ok(seq.to_string()),
        (None, Some(path)) => read_sequence_file(path),
        (None, None) => Err(CliError::Argument(
            "either a SEQUENCE argument or --input is required".to_string(),
        )),
    }
}
