//! End-to-end scramble pipeline.
//!
//! One run is strictly sequential:
//!
//! ```text
//! validate_input ─> load_table ─> rename ─> reorder ─> coerce ─> save_table
//! ```
//!
//! Each stage consumes the previous stage's output. Fatal errors (input
//! validation, parsing, writing) stop the run before anything is written;
//! per-column coercion problems never do.
//!
//! # Example
//!
//! ```no_run
//! use schema_scrambler::config::ScrambleConfig;
//! use schema_scrambler::pipeline::run_scramble;
//! use std::path::Path;
//!
//! let config = ScrambleConfig { seed: Some(7), ..Default::default() };
//! let report = run_scramble(Path::new("input.csv"), Path::new("output.csv"), &config)?;
//! println!("{}", report.summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod executor;
pub mod io;
pub mod validation;

pub use executor::{RunReport, Scrambled, run_scramble, scramble_df};
pub use io::{load_table, save_table};
pub use validation::{EXPECTED_EXTENSION, validate_input};
