use std::path::{Component, Path};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{BallotGuardError, Result};

/// Decides whether a file, given by its path relative to the scan root, is validated.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

pub struct GlobFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
    year_dirs_only: bool,
}

impl GlobFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    /// Extensions compare case-insensitively.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| BallotGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| BallotGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            exclude_patterns,
            year_dirs_only: false,
        })
    }

    /// Only accept files below a four-digit top-level directory such as `2020/`.
    #[must_use]
    pub const fn with_year_dirs_only(mut self, year_dirs_only: bool) -> Self {
        self.year_dirs_only = year_dirs_only;
        self
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }

    fn in_year_dir(path: &Path) -> bool {
        let mut components = path.components();
        let first = components.next();
        components.next().is_some()
            && matches!(first, Some(Component::Normal(name)) if name.to_str().is_some_and(is_year))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path)
            && !self.is_excluded(path)
            && (!self.year_dirs_only || Self::in_year_dir(path))
    }
}

/// Four ASCII digits, e.g. `2016`.
#[must_use]
pub fn is_year(name: &str) -> bool {
    name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
