use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Serializes `value` as JSON to `path`, or to standard output when no path is given.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            to_writer(&mut writer, value, pretty)?;
            writer.flush()?;
            info!(path = %path.display(), "JSON output written.");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            to_writer(&mut writer, value, pretty)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn to_writer<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
