use std::path::{Path, PathBuf};

use super::report::RunReport;

/// Result of validating one file with one suite.
///
/// `path` is relative to the scan root. `year` is the file's group label and
/// may be empty. A file that cannot be read or parsed is `Unreadable` and
/// counts as failed.
#[derive(Debug)]
pub enum FileResult {
    Passed {
        path: PathBuf,
        year: String,
        records: usize,
    },
    Failed {
        path: PathBuf,
        year: String,
        records: usize,
        report: RunReport,
    },
    Unreadable {
        path: PathBuf,
        year: String,
        error: String,
    },
}

impl FileResult {
    /// Classify a finished report.
    #[must_use]
    pub fn from_report(path: PathBuf, year: String, records: usize, report: RunReport) -> Self {
        if report.passed() {
            Self::Passed {
                path,
                year,
                records,
            }
        } else {
            Self::Failed {
                path,
                year,
                records,
                report,
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Passed { path, .. } | Self::Failed { path, .. } | Self::Unreadable { path, .. } => {
                path
            }
        }
    }

    #[must_use]
    pub fn year(&self) -> &str {
        match self {
            Self::Passed { year, .. } | Self::Failed { year, .. } | Self::Unreadable { year, .. } => {
                year
            }
        }
    }

    /// Records read, header included. Zero for unreadable files.
    #[must_use]
    pub const fn records(&self) -> usize {
        match self {
            Self::Passed { records, .. } | Self::Failed { records, .. } => *records,
            Self::Unreadable { .. } => 0,
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.is_passed()
    }

    #[must_use]
    pub const fn report(&self) -> Option<&RunReport> {
        match self {
            Self::Failed { report, .. } => Some(report),
            Self::Passed { .. } | Self::Unreadable { .. } => None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Passed { .. } => "passed",
            Self::Failed { .. } => "failed",
            Self::Unreadable { .. } => "error",
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
