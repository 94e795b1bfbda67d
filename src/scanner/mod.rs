mod filter;

pub use filter::{FileFilter, GlobFilter, is_year};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{BallotGuardError, Result};

/// Extension of the files the scanner selects.
pub const CSV_EXTENSION: &str = "csv";

/// A results file selected for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    /// Path used to open the file.
    pub path: PathBuf,
    /// Path relative to the scan root, used in messages.
    pub short_path: PathBuf,
    /// First directory of `short_path`, or empty for files at the root.
    pub year: String,
}

impl CsvFile {
    #[must_use]
    pub fn new(root: &Path, short_path: PathBuf) -> Self {
        let year = year_label(&short_path);
        Self {
            path: root.join(&short_path),
            short_path,
            year,
        }
    }
}

fn year_label(short_path: &Path) -> String {
    let mut components = short_path.components();
    match (components.next(), components.next()) {
        (Some(first), Some(_)) => first.as_os_str().to_string_lossy().into_owned(),
        _ => String::new(),
    }
}

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return every matching file, sorted by relative path.
    ///
    /// # Errors
    /// Returns an error if the root cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<CsvFile>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<CsvFile> {
        let mut files: Vec<CsvFile> = WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {e}");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.path().strip_prefix(root).ok().map(Path::to_path_buf))
            .filter(|relative| self.filter.should_include(relative))
            .map(|relative| CsvFile::new(root, relative))
            .collect();
        files.sort_by(|a, b| a.short_path.cmp(&b.short_path));
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<CsvFile>> {
        let metadata = std::fs::metadata(root).map_err(|source| BallotGuardError::FileRead {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(BallotGuardError::Config(format!(
                "Root path is not a directory: {}",
                root.display()
            )));
        }
        Ok(self.scan_impl(root))
    }
}

/// Resolve files named on the command line, relative to `root`.
///
/// Only the extension rule applies; exclude globs and the year-directory rule
/// are not consulted.
#[must_use]
pub fn explicit_files(root: &Path, files: &[PathBuf]) -> Vec<CsvFile> {
    let mut selected: Vec<CsvFile> = files
        .iter()
        .filter(|file| {
            file.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
        })
        .map(|file| CsvFile::new(root, file.clone()))
        .collect();
    selected.sort_by(|a, b| a.short_path.cmp(&b.short_path));
    selected.dedup();
    selected
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
