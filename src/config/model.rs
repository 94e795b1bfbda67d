use serde::{Deserialize, Serialize};

use crate::checker::{ExampleLimit, SuiteOptions, default_exact_breakdown_headers};

/// Default number of example rows shown per failing check.
pub const DEFAULT_MAX_EXAMPLES: i64 = 10;

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Glob patterns, relative to the root, for files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Only pick up files below a four-digit year directory (default: true).
    #[serde(default = "default_true")]
    pub year_dirs_only: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            year_dirs_only: true,
        }
    }
}

/// Settings that shape the checks each suite runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecksConfig {
    /// Failing rows listed per check on the console. Negative lists all.
    #[serde(default = "default_max_examples")]
    pub max_examples: i64,

    /// Fields the missing-values suite requires a value for.
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,

    /// Header names the file-format suite requires.
    #[serde(default)]
    pub required_headers: Vec<String>,

    /// Header set whose breakdown must add up to `votes` exactly.
    #[serde(default = "default_exact_breakdown_headers")]
    pub exact_breakdown_headers: Vec<String>,

    /// Flag cells made only of punctuation in the file-format suite.
    #[serde(default)]
    pub non_alphanumeric: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            max_examples: DEFAULT_MAX_EXAMPLES,
            required_fields: default_required_fields(),
            required_headers: Vec::new(),
            exact_breakdown_headers: default_exact_breakdown_headers(),
            non_alphanumeric: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

impl Config {
    #[must_use]
    pub fn suite_options(&self) -> SuiteOptions {
        SuiteOptions {
            required_fields: self.checks.required_fields.clone(),
            required_headers: self.checks.required_headers.clone(),
            exact_breakdown_headers: self.checks.exact_breakdown_headers.clone(),
            non_alphanumeric: self.checks.non_alphanumeric,
        }
    }

    #[must_use]
    pub fn example_limit(&self) -> ExampleLimit {
        ExampleLimit::from(self.checks.max_examples)
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_examples() -> i64 {
    DEFAULT_MAX_EXAMPLES
}

fn default_required_fields() -> Vec<String> {
    SuiteOptions::default().required_fields
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
