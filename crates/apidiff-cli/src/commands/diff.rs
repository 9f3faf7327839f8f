//! Diff command
//!
//! Usage: apidiff-cli [OPTIONS] <TEMP_FOLDER> <OLD_PATH> <NEW_PATH>

use apidiff_core::logging_facility::{self, Profile};
use apidiff_core::{run_api_diff, DiffConfig, Dialect, DuplicatePolicy, OutputFormat};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Shared parent directory of both snapshots (not read)
    pub temp_folder: PathBuf,

    /// Snapshot directory of the previous API
    pub old_path: PathBuf,

    /// Snapshot directory of the current API
    pub new_path: PathBuf,

    /// TOML file with dialect, on_duplicate and format defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listing dialect (overrides the config file)
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,

    /// What to do when a snapshot repeats a symbol (overrides the config file)
    #[arg(long, value_enum)]
    pub on_duplicate: Option<DuplicateArg>,

    /// Report format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log profile; logs go to stderr
    #[arg(long, value_enum, default_value = "quiet")]
    pub log: LogArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DialectArg {
    Extended,
    Classic,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Extended => Dialect::Extended,
            DialectArg::Classic => Dialect::Classic,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DuplicateArg {
    Overwrite,
    Fail,
}

impl From<DuplicateArg> for DuplicatePolicy {
    fn from(arg: DuplicateArg) -> Self {
        match arg {
            DuplicateArg::Overwrite => DuplicatePolicy::Overwrite,
            DuplicateArg::Fail => DuplicatePolicy::Fail,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Markdown,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogArg {
    Quiet,
    Dev,
    Json,
    Off,
}

impl LogArg {
    fn profile(self) -> Option<Profile> {
        match self {
            LogArg::Quiet => Some(Profile::Quiet),
            LogArg::Dev => Some(Profile::Development),
            LogArg::Json => Some(Profile::Production),
            LogArg::Off => None,
        }
    }
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(profile) = args.log.profile() {
        logging_facility::init(profile);
    }
    tracing::debug!(temp_folder = %args.temp_folder.display(), "temp folder accepted, not read");

    let config = resolve_config(&args)?;
    let rendered = run_api_diff(&args.old_path, &args.new_path, &config)?;

    // Output
    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered)?;
        println!("✓ Report written to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

/// Config file values with command-line overrides applied
fn resolve_config(args: &DiffArgs) -> Result<DiffConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => DiffConfig::load(path)?,
        None => DiffConfig::default(),
    };
    if let Some(dialect) = args.dialect {
        config.dialect = dialect.into();
    }
    if let Some(on_duplicate) = args.on_duplicate {
        config.on_duplicate = on_duplicate.into();
    }
    if let Some(format) = args.format {
        config.format = format.into();
    }
    Ok(config)
}
