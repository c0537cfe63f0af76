use crate::config::ScrambleConfig;
use crate::error::Result;
use crate::pipeline::run_scramble;
use crate::scramble::SemanticType;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "scrambler",
    version,
    about = "Randomly renames, reorders, and changes the data types of columns in a CSV dataset to obfuscate its structure"
)]
pub struct Cli {
    /// Path to the input CSV file
    pub input_file: PathBuf,

    /// Path to the output CSV file
    pub output_file: PathBuf,

    /// Random seed for reproducibility (any integer, including negatives)
    #[arg(long, env = "SCRAMBLER_SEED", allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Path to a JSON configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prefix for the opaque column labels
    #[arg(long)]
    pub prefix: Option<String>,

    /// Types the coercer may choose from (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub target_types: Option<Vec<SemanticType>>,

    /// Keep the original column names
    #[arg(long)]
    pub skip_rename: bool,

    /// Keep the original column order
    #[arg(long)]
    pub skip_reorder: bool,

    /// Keep the original column types
    #[arg(long)]
    pub skip_coerce: bool,

    /// Fail instead of replacing an existing output file
    #[arg(long)]
    pub no_overwrite: bool,

    /// Run every stage but do not write the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Minimum level of log messages to print
    #[arg(long, default_value = "info", conflicts_with = "quiet")]
    pub log_level: tracing::Level,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn effective_log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else {
            self.log_level
        }
    }

    /// Builds the run configuration: defaults, then the config file, then
    /// flags.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ScramblerError::Config`] if the config file cannot be loaded
    /// or the merged configuration is invalid.
    pub fn to_config(&self) -> Result<ScrambleConfig> {
        let mut config = match &self.config {
            Some(path) => ScrambleConfig::load(path)?,
            None => ScrambleConfig::default(),
        };

        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(prefix) = &self.prefix {
            config.label_prefix.clone_from(prefix);
        }
        if let Some(types) = &self.target_types {
            config.target_types.clone_from(types);
        }
        if self.skip_rename {
            config.stages.rename = false;
        }
        if self.skip_reorder {
            config.stages.reorder = false;
        }
        if self.skip_coerce {
            config.stages.coerce = false;
        }
        if self.no_overwrite {
            config.allow_overwrite = false;
        }
        if self.dry_run {
            config.dry_run = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Runs one invocation and maps its outcome to a process exit code.
///
/// Fatal errors are logged at ERROR level before their code is returned.
pub fn run(cli: &Cli) -> ExitCode {
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;
    tracing::debug!("Effective configuration: {config:?}");

    let report = run_scramble(&cli.input_file, &cli.output_file, &config)?;
    tracing::info!("{}", report.summary());
    Ok(())
}
