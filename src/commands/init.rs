use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::print_error_full;
use crate::{BallotGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error_full(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template to `args.output`.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(BallotGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# ballot-guard configuration file

[checks]
# Failing rows listed per check on the console; negative lists all (default: 10)
max_examples = 10

# Fields the missing-values suite requires a value for
required_fields = ["county", "precinct", "office"]

# Header names the file-format suite requires (empty disables the check)
required_headers = []

# Files with exactly these headers must have breakdown columns that add up
# to 'votes' exactly; other files only must not exceed it
exact_breakdown_headers = [
    "county",
    "precinct",
    "office",
    "district",
    "party",
    "candidate",
    "votes",
    "early_voting",
    "election_day",
    "mail",
    "provisional",
]

# Flag cells made only of punctuation, such as "-" or "*" (default: false)
non_alphanumeric = false

[scanner]
# Only check files below a four-digit year directory (default: true)
year_dirs_only = true

# Exclude patterns (glob syntax, relative to the root)
exclude = [
    # "**/raw/**",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
