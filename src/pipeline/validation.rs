//! Input file validation.
//!
//! Checks that the input exists and carries the CSV extension before any
//! parsing happens. File contents are not inspected here.

use crate::error::{Result, ResultExt as _, ScramblerError};
use std::path::Path;

pub const EXPECTED_EXTENSION: &str = "csv";

/// Validates that `path` is an existing file with a `.csv` extension.
///
/// The extension comparison is case-insensitive.
///
/// # Errors
///
/// - [`ScramblerError::NotFound`] if nothing exists at `path` or it is not a
///   regular file.
/// - [`ScramblerError::Format`] if the extension is not `csv`.
/// - [`ScramblerError::Io`] if the file exists but cannot be opened.
pub fn validate_input(path: &Path) -> Result<()> {
    match std::fs::File::open(path) {
        Ok(file) => {
            let is_file = file.metadata().map(|m| m.is_file()).unwrap_or(false);
            if !is_file {
                return Err(ScramblerError::NotFound(path.to_path_buf()));
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScramblerError::NotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Error accessing input file {}", path.display()));
        }
    }

    if !has_expected_extension(path) {
        return Err(ScramblerError::Format(format!(
            "{} must be a .{EXPECTED_EXTENSION} file",
            path.display()
        )));
    }

    Ok(())
}

fn has_expected_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPECTED_EXTENSION))
}
