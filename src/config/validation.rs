//! Configuration semantic validation.
//!
//! Runs after parsing: checks values that TOML types alone cannot constrain.

use globset::Glob;

use crate::config::Config;
use crate::{BallotGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a field name is blank or an exclude pattern is not a valid glob.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_names("checks.required_fields", &config.checks.required_fields)?;
    validate_names("checks.required_headers", &config.checks.required_headers)?;
    validate_names(
        "checks.exact_breakdown_headers",
        &config.checks.exact_breakdown_headers,
    )?;
    validate_exclude_patterns(&config.scanner.exclude)
}

fn validate_names(key: &str, names: &[String]) -> Result<()> {
    if let Some(i) = names.iter().position(|name| name.trim().is_empty()) {
        return Err(BallotGuardError::Config(format!(
            "{key}[{i}] must not be empty"
        )));
    }
    Ok(())
}

fn validate_exclude_patterns(patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        Glob::new(pattern).map_err(|source| BallotGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
