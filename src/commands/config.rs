use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{ConfigLoader, FileConfigLoader};
use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            if !cli.quiet {
                println!("Configuration is valid: {}", config_path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error_full(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Parses and validates a configuration file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML, or has
/// invalid values.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
