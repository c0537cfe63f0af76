//! # Schema Scrambler
//!
//! Obfuscates the schema of a CSV dataset before it is shared. Column names
//! are replaced with opaque `column_<i>` labels, the column order is
//! shuffled, and every column is coerced to a different type while keeping
//! its values where a conversion makes sense. Row count and row order never
//! change, and the values themselves are not anonymized.
//!
//! ## Quick Start
//!
//! ```no_run
//! use schema_scrambler::config::ScrambleConfig;
//! use schema_scrambler::pipeline::run_scramble;
//! use std::path::Path;
//!
//! let config = ScrambleConfig { seed: Some(42), ..Default::default() };
//! let report = run_scramble(Path::new("people.csv"), Path::new("shared.csv"), &config)?;
//!
//! for outcome in &report.outcomes {
//!     println!("{outcome:?}");
//! }
//! # Ok::<(), schema_scrambler::error::ScramblerError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`pipeline`]: input validation, CSV loading/writing, and the run driver
//! - [`scramble`]: the rename, reorder and coerce transforms plus the
//!   random source they share
//! - [`config`]: run settings, loadable from JSON
//! - [`error`]: fatal error taxonomy and exit codes
//! - [`logging`]: log subscriber setup
//! - [`cli`]: command-line front end
//!
//! ## Reproducibility
//!
//! With a seed, each stage draws from its own generator derived from that
//! seed, so the same input and seed always produce the same output file.
//! Without one, the generator is seeded from OS entropy.

#![warn(clippy::all, rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod scramble;
