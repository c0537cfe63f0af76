//! Schema randomization transforms.
//!
//! Three independent transforms, applied by the pipeline in fixed order:
//!
//! 1. [`rename_columns`]: every column gets an opaque `column_<i>` label,
//!    assigned by a random permutation.
//! 2. [`reorder_columns`]: the column order is shuffled uniformly.
//! 3. [`coerce_columns`]: each column is converted to a randomly chosen
//!    different [`SemanticType`].
//!
//! None of them adds, drops or reorders rows. Randomness comes from a
//! [`RandomSource`] owned by the caller.
//!
//! ```no_run
//! use schema_scrambler::scramble::{RandomSource, SemanticType, Stage, coerce_columns, rename_columns, reorder_columns};
//! use polars::prelude::*;
//!
//! let mut df = df!("id" => [1i64, 2], "name" => ["a", "b"])?;
//! let mut source = RandomSource::seeded(7);
//!
//! rename_columns(&mut df, "column_", source.for_stage(Stage::Rename))?;
//! let mut df = reorder_columns(&df, source.for_stage(Stage::Reorder))?;
//! let outcomes = coerce_columns(&mut df, &SemanticType::ALL, source.for_stage(Stage::Coerce));
//! # Ok::<(), PolarsError>(())
//! ```

pub mod coerce;
pub mod kind;
pub mod random;
pub mod rename;
pub mod reorder;

pub use coerce::{ColumnOutcome, coerce_columns, coerce_columns_with};
pub use kind::{SemanticType, convert};
pub use random::{RandomSource, Stage, derive_seed};
pub use rename::{Relabel, opaque_labels, rename_columns};
pub use reorder::reorder_columns;
