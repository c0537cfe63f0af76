//! Centralized error handling for the scrambler.
//!
//! Fatal failures (a missing input, a bad extension, unparsable CSV, an
//! unwritable destination, invalid configuration) are modelled as
//! [`ScramblerError`] variants. Each variant maps to a distinct process exit
//! code so scripts driving the binary can tell them apart:
//!
//! ```
//! use schema_scrambler::error::ScramblerError;
//! use std::path::PathBuf;
//!
//! let err = ScramblerError::NotFound(PathBuf::from("missing.csv"));
//! assert_eq!(err.exit_code(), 2);
//! assert_eq!(err.to_string(), "Input file not found: missing.csv");
//! ```
//!
//! Per-column conversion problems are deliberately *not* represented here.
//! They are reported through [`crate::scramble::ColumnOutcome`] and never
//! abort a run.
//!
//! ## Context Extension Trait
//!
//! [`ResultExt`] adds `.context()` to any `Result` whose error converts into
//! [`ScramblerError`]:
//!
//! ```no_run
//! use schema_scrambler::error::ResultExt as _;
//! use std::fs;
//!
//! fn read_settings() -> schema_scrambler::error::Result<String> {
//!     let text = fs::read_to_string("settings.json").context("Failed to read settings")?;
//!     Ok(text)
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Main error type for scrambler operations.
#[derive(Debug)]
pub enum ScramblerError {
    /// The input path does not exist.
    NotFound(PathBuf),

    /// The input path does not carry the expected `.csv` extension.
    Format(String),

    /// The input content could not be parsed as a table.
    Parse(String),

    /// The destination could not be created or written.
    Write(String),

    /// Invalid configuration file or flag combination.
    Config(String),

    /// Other I/O errors
    Io(std::io::Error),

    /// Generic error with context
    Other(String),
}

impl ScramblerError {
    /// Process exit code reported for this error.
    ///
    /// `0` is reserved for success and `1` for anything not covered by a
    /// dedicated variant.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 2,
            Self::Format(_) => 3,
            Self::Parse(_) => 4,
            Self::Write(_) => 5,
            Self::Config(_) => 6,
            Self::Io(_) | Self::Other(_) => 1,
        }
    }
}

impl fmt::Display for ScramblerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Input file not found: {}", path.display()),
            Self::Format(msg) => write!(f, "Unsupported input format: {msg}"),
            Self::Parse(msg) => write!(f, "Failed to parse input: {msg}"),
            Self::Write(msg) => write!(f, "Failed to write output: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ScramblerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScramblerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for ScramblerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(format!("{err:#}"))
    }
}

impl From<serde_json::Error> for ScramblerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for ScramblerError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for scrambler operations.
pub type Result<T> = std::result::Result<T, ScramblerError>;

/// Extension trait to add context to results.
///
/// The variant of the underlying error is kept so that exit codes survive
/// the extra context; only the message is extended.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ScramblerError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| prefix(e.into(), &msg.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| prefix(e.into(), &f()))
    }
}

fn prefix(err: ScramblerError, msg: &str) -> ScramblerError {
    match err {
        ScramblerError::NotFound(path) => ScramblerError::NotFound(path),
        ScramblerError::Format(inner) => ScramblerError::Format(format!("{msg}: {inner}")),
        ScramblerError::Parse(inner) => ScramblerError::Parse(format!("{msg}: {inner}")),
        ScramblerError::Write(inner) => ScramblerError::Write(format!("{msg}: {inner}")),
        ScramblerError::Config(inner) => ScramblerError::Config(format!("{msg}: {inner}")),
        other => ScramblerError::Other(format!("{msg}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScramblerError::Format("data.txt must have a .csv extension".to_owned());
        assert_eq!(
            err.to_string(),
            "Unsupported input format: data.txt must have a .csv extension"
        );
    }

    #[test]
    fn test_exit_codes_are_distinct_for_fatal_kinds() {
        let codes = [
            ScramblerError::NotFound(PathBuf::from("x.csv")).exit_code(),
            ScramblerError::Format(String::new()).exit_code(),
            ScramblerError::Parse(String::new()).exit_code(),
            ScramblerError::Write(String::new()).exit_code(),
            ScramblerError::Config(String::new()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0, "fatal errors must not report success");
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b, "exit codes must be distinct");
            }
        }
    }

    #[test]
    fn test_result_context_keeps_variant() {
        let result: Result<()> = Err(ScramblerError::Parse("bad row 3".to_owned()));
        let err = result.context("Failed to read CSV").unwrap_err();
        assert!(
            matches!(&err, ScramblerError::Parse(msg) if msg == "Failed to read CSV: bad row 3"),
            "unexpected error: {err:?}"
        );
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_result_context_on_io_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "out.csv",
        ));

        let err = result.context("Failed to open output").unwrap_err();
        assert!(
            err.to_string().contains("Failed to open output"),
            "context should be part of the message: {err}"
        );
        assert_eq!(err.exit_code(), 1);
    }
}
