use crate::error::{Result, ScramblerError};
use polars::prelude::*;
use std::path::Path;

/// Reads a headed CSV file into memory, inferring one dtype per column.
///
/// # Errors
///
/// Returns [`ScramblerError::Parse`] if the file is not valid CSV.
pub fn load_table(path: &Path, infer_schema_length: Option<usize>) -> Result<DataFrame> {
    LazyCsvReader::new(path)
        .with_infer_schema_length(infer_schema_length)
        .with_has_header(true)
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|e| ScramblerError::Parse(format!("{}: {e}", path.display())))
}

/// Writes `df` as CSV with a header row and no index column.
///
/// A file left behind by a failed write is removed.
///
/// # Errors
///
/// Returns [`ScramblerError::Write`] if the file cannot be created or written.
pub fn save_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| ScramblerError::Write(format!("Failed to create {}: {e}", path.display())))?;

    let written = CsvWriter::new(file).include_header(true).finish(df);

    if let Err(e) = written {
        let _ = std::fs::remove_file(path);
        return Err(ScramblerError::Write(format!(
            "Failed to write {}: {e}",
            path.display()
        )));
    }
    Ok(())
}
