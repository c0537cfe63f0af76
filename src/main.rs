//! # Scrambler Entry Point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Install the stdout log subscriber (once, before any stage)
//!   └─> Run the pipeline and exit with its code
//! ```
//!
//! ```bash
//! scrambler input.csv output.csv --seed 42
//! ```
//!
//! Exit codes: `0` success, `2` input not found, `3` wrong extension,
//! `4` unparsable CSV, `5` output not writable, `6` invalid configuration,
//! `1` anything else.

#![warn(clippy::all, rust_2018_idioms)]

use clap::Parser as _;
use schema_scrambler::cli::{self, Cli};
use std::process::ExitCode;

#[expect(clippy::print_stderr)] // Logging is unavailable at this point
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = schema_scrambler::logging::init(cli.effective_log_level()) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    cli::run(&cli)
}
