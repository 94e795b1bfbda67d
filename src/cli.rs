use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checker::Suite;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ballot-guard")]
#[command(author, version, about = "Validate election-results CSV files")]
#[command(long_about = "Runs a suite of data-quality checks over precinct-level election \
    results stored as CSV files under year directories.\n\n\
    Exit codes:\n  \
    0 - All files passed\n  \
    1 - At least one file failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a validation suite over CSV files
    Check(CheckArgs),

    /// List the available suites
    Suites,

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Suite to run [possible values: file-format, duplicate-entries, missing-values,
    /// vote-breakdown-totals, vote-method-totals]
    pub suite: Suite,

    /// Root directory holding the year directories
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Validate only these files, relative to the root
    #[arg(long, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Maximum example rows per failure message; negative means no limit (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub max_examples: Option<i64>,

    /// Append each failing file's full report to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Apply --max-examples to the log file as well
    #[arg(long, requires = "log_file")]
    pub truncate_log_file: bool,

    /// Group failing files by year with ::group:: markers
    #[arg(long)]
    pub group_failures: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Also check files outside four-digit year directories
    #[arg(long)]
    pub all_dirs: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".ballot-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(default_value = ".ballot-guard.toml")]
        config: PathBuf,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
