//! Logging infrastructure for the scrambler.
//!
//! Every component logs through the `tracing` macros and never touches the
//! sink directly. The sink is chosen once at startup:
//!
//! ```no_run
//! use schema_scrambler::logging;
//!
//! // Initialize once at startup, before any stage runs
//! logging::init(tracing::Level::INFO).expect("Failed to initialize logging");
//!
//! tracing::info!("Scrambler started");
//! ```
//!
//! Tests build a subscriber over their own writer with [`subscriber`] and
//! scope it with `tracing::subscriber::with_default`, so captured output can
//! be asserted on without installing a global.

use anyhow::{Context as _, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Builds the filter for `level`, letting `RUST_LOG` override it when set.
fn env_filter(level: Level) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_str().to_lowercase()))
        .context("Failed to create env filter")
}

/// Builds a timestamped, leveled subscriber writing to `writer`.
///
/// `ansi` enables color codes; only pass `true` for a terminal.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is unset and the fallback filter cannot be
/// constructed.
pub fn subscriber<W>(
    writer: W,
    level: Level,
    ansi: bool,
) -> Result<impl tracing::Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter(level)?)
        .with_writer(writer)
        .with_target(false)
        .with_level(true)
        .with_ansi(ansi)
        .finish())
}

/// Installs the stdout subscriber as the process-wide default.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init(level: Level) -> Result<()> {
    let ansi = std::io::IsTerminal::is_terminal(&std::io::stdout());
    let subscriber = subscriber(std::io::stdout, level, ansi)?;
    tracing::subscriber::set_global_default(subscriber)
        .context("Logging has already been initialized")?;

    tracing::debug!("Logging initialized at {level}");
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::capture::LogBuffer;
    use super::*;

    #[test]
    fn test_subscriber_writes_level_and_message() {
        let buffer = LogBuffer::default();
        let subscriber = subscriber(buffer.clone(), Level::INFO, false).expect("subscriber");

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("column skipped");
        });

        let out = buffer.contents();
        assert!(out.contains("WARN"), "level should be logged: {out}");
        assert!(out.contains("column skipped"), "message should be logged: {out}");
        assert!(!out.contains('\x1b'), "captured output must be plain text: {out:?}");
    }
}
