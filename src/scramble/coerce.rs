//! Per-column type coercion.
//!
//! Each column independently gets a random target type from its candidate
//! set and is converted in place. A column with no candidates is skipped
//! with a warning; a conversion that errors is logged and the column is left
//! exactly as it was. Neither case stops the remaining columns.

use super::kind::{self, SemanticType};
use anyhow::{Context as _, Result};
use polars::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom as _;

/// What happened to one column during coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOutcome {
    Converted {
        column: String,
        from: SemanticType,
        to: SemanticType,
    },
    /// No legal target type; the column is unchanged.
    Skipped { column: String, from: SemanticType },
    /// The conversion errored; the column is unchanged.
    Failed {
        column: String,
        from: SemanticType,
        to: SemanticType,
        error: String,
    },
}

impl ColumnOutcome {
    pub fn column(&self) -> &str {
        match self {
            Self::Converted { column, .. }
            | Self::Skipped { column, .. }
            | Self::Failed { column, .. } => column,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Coerces every column of `df` using [`kind::convert`].
pub fn coerce_columns<R: Rng + ?Sized>(
    df: &mut DataFrame,
    universe: &[SemanticType],
    rng: &mut R,
) -> Vec<ColumnOutcome> {
    coerce_columns_with(df, universe, rng, kind::convert)
}

/// Coerces every column of `df` with a caller supplied conversion routine.
pub fn coerce_columns_with<R, F>(
    df: &mut DataFrame,
    universe: &[SemanticType],
    rng: &mut R,
    convert: F,
) -> Vec<ColumnOutcome>
where
    R: Rng + ?Sized,
    F: Fn(&Series, SemanticType, SemanticType) -> PolarsResult<Series>,
{
    let names = df.get_column_names_owned();
    let mut outcomes = Vec::with_capacity(names.len());

    for name in names {
        let column = name.to_string();
        let from = match df.column(&name) {
            Ok(c) => SemanticType::from_dtype(c.dtype()),
            Err(e) => {
                tracing::error!("Column '{column}' disappeared during coercion: {e}");
                continue;
            }
        };

        let candidates = from.candidates_within(universe);
        let Some(&to) = candidates.choose(rng) else {
            tracing::warn!("No valid conversion types found for column: {column}");
            outcomes.push(ColumnOutcome::Skipped { column, from });
            continue;
        };

        match replace_converted(df, &name, from, to, &convert) {
            Ok(()) => {
                tracing::info!("Column '{column}' converted from {from} to {to}");
                outcomes.push(ColumnOutcome::Converted { column, from, to });
            }
            Err(e) => {
                tracing::error!("{e:#}");
                outcomes.push(ColumnOutcome::Failed {
                    column,
                    from,
                    to,
                    error: format!("{e:#}"),
                });
            }
        }
    }

    outcomes
}

/// Converts one column and swaps it into `df`, leaving `df` untouched on error.
fn replace_converted<F>(
    df: &mut DataFrame,
    name: &str,
    from: SemanticType,
    to: SemanticType,
    convert: &F,
) -> Result<()>
where
    F: Fn(&Series, SemanticType, SemanticType) -> PolarsResult<Series>,
{
    let failed = || format!("Failed to convert column '{name}' from {from} to {to}");

    let series = df.column(name).with_context(failed)?.as_materialized_series();
    let converted = convert(series, from, to).with_context(failed)?;

    if converted.len() != df.height() {
        anyhow::bail!(
            "{}: produced {} values for {} rows",
            failed(),
            converted.len(),
            df.height()
        );
    }

    df.with_column(converted.with_name(name.into()))
        .with_context(failed)?;
    Ok(())
}
