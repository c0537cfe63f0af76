//! Scramble execution engine.
//!
//! Validates the input, loads it, applies the enabled stages in fixed order
//! (rename, reorder, coerce) and writes the result, producing a
//! [`RunReport`].

use super::io::{load_table, save_table};
use super::validation::validate_input;
use crate::config::ScrambleConfig;
use crate::error::{Result, ScramblerError};
use crate::scramble::{
    ColumnOutcome, RandomSource, Relabel, Stage, coerce_columns, rename_columns, reorder_columns,
};
use polars::prelude::*;
use std::path::Path;

/// Report generated after a scramble run.
///
/// The relabel mapping is kept in memory only; it is never written next to
/// the output.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of rows read
    pub rows_before: usize,

    /// Number of rows written
    pub rows_after: usize,

    /// Number of columns (unchanged by every stage)
    pub columns: usize,

    /// Original name to opaque label, in input column order
    pub relabels: Vec<Relabel>,

    /// Output column order
    pub output_order: Vec<String>,

    /// Per-column coercion results, in output column order
    pub outcomes: Vec<ColumnOutcome>,

    /// Whether the output file was written (false on dry runs)
    pub written: bool,

    /// Time taken for execution
    pub duration: std::time::Duration,
}

impl RunReport {
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ColumnOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ColumnOutcome::Failed { .. }))
            .count()
    }

    /// Create a summary message
    pub fn summary(&self) -> String {
        format!(
            "Scramble completed: {} rows, {} columns, {} renamed, {} converted, {} skipped, {} failed, {:.2}s{}",
            self.rows_after,
            self.columns,
            self.relabels.len(),
            self.converted(),
            self.skipped(),
            self.failed(),
            self.duration.as_secs_f64(),
            if self.written { "" } else { " (dry run)" }
        )
    }
}

/// In-memory result of the randomization stages.
#[derive(Debug, Clone)]
pub struct Scrambled {
    pub df: DataFrame,
    pub relabels: Vec<Relabel>,
    pub outcomes: Vec<ColumnOutcome>,
}

/// Applies the enabled stages of `config` to `df`.
///
/// # Errors
///
/// Returns an error if renaming or reordering fails, or if a stage changed
/// the row count. Per-column coercion failures are reported in
/// [`Scrambled::outcomes`] instead.
pub fn scramble_df(
    mut df: DataFrame,
    config: &ScrambleConfig,
    source: &mut RandomSource,
) -> Result<Scrambled> {
    let rows = df.height();

    let relabels = if config.stages.rename {
        let relabels = rename_columns(&mut df, &config.label_prefix, source.for_stage(Stage::Rename))
            .map_err(|e| ScramblerError::Other(format!("Failed to rename columns: {e}")))?;
        tracing::info!("Renamed {} columns", relabels.len());
        relabels
    } else {
        Vec::new()
    };

    if config.stages.reorder {
        df = reorder_columns(&df, source.for_stage(Stage::Reorder))
            .map_err(|e| ScramblerError::Other(format!("Failed to reorder columns: {e}")))?;
        tracing::info!("Reordered {} columns", df.width());
    }

    let outcomes = if config.stages.coerce {
        coerce_columns(
            &mut df,
            &config.target_universe(),
            source.for_stage(Stage::Coerce),
        )
    } else {
        Vec::new()
    };

    if df.height() != rows {
        return Err(ScramblerError::Other(format!(
            "Row count changed from {rows} to {}",
            df.height()
        )));
    }

    Ok(Scrambled {
        df,
        relabels,
        outcomes,
    })
}

/// Scrambles `input_path` into `output_path`.
///
/// Nothing is written unless every stage before the write succeeds.
///
/// # Errors
///
/// Returns the fatal [`ScramblerError`] that stopped the run: a missing or
/// misnamed input, unparsable CSV, a refused overwrite, or a failed write.
pub fn run_scramble(
    input_path: &Path,
    output_path: &Path,
    config: &ScrambleConfig,
) -> Result<RunReport> {
    let start = std::time::Instant::now();
    config.validate()?;

    validate_input(input_path)?;

    if !config.allow_overwrite && output_path.exists() {
        return Err(ScramblerError::Write(format!(
            "{} already exists and overwriting is disabled",
            output_path.display()
        )));
    }

    let df = load_table(input_path, config.infer_schema_length)?;
    tracing::info!("Successfully read input file: {}", input_path.display());
    let rows_before = df.height();

    let mut source = RandomSource::new(config.seed);
    let Scrambled {
        mut df,
        relabels,
        outcomes,
    } = scramble_df(df, config, &mut source)?;

    let written = if config.dry_run {
        tracing::info!("Dry run: not writing {}", output_path.display());
        false
    } else {
        save_table(&mut df, output_path)?;
        tracing::info!("Successfully wrote output to file: {}", output_path.display());
        true
    };

    Ok(RunReport {
        rows_before,
        rows_after: df.height(),
        columns: df.width(),
        relabels,
        output_order: df
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect(),
        outcomes,
        written,
        duration: start.elapsed(),
    })
}
