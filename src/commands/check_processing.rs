use std::path::Path;

use log::{debug, warn};
use rayon::prelude::*;

use crate::checker::{DefectCategory, FileResult, FileRun, RunReport, Suite, SuiteOptions};
use crate::error::{BallotGuardError, Result};
use crate::reader::RecordReader;
use crate::scanner::CsvFile;

/// Validate every file in parallel. Results keep the order of `files`.
#[must_use]
pub fn validate_files(files: &[CsvFile], suite: Suite, options: &SuiteOptions) -> Vec<FileResult> {
    files
        .par_iter()
        .map(|file| validate_file(file, suite, options))
        .collect()
}

/// Stream one file through `suite`. A file that cannot be read or parsed
/// becomes `FileResult::Unreadable`.
#[must_use]
pub fn validate_file(file: &CsvFile, suite: Suite, options: &SuiteOptions) -> FileResult {
    match run_file(&file.path, suite, options) {
        Ok((records, report)) => {
            debug!(
                "{} {}: {records} records through {} checks, {} failures",
                suite,
                file.short_path.display(),
                report.check_count(),
                report.failure_count()
            );
            if !report.passed() {
                let categories: Vec<&str> = report
                    .failing_categories()
                    .into_iter()
                    .map(DefectCategory::as_str)
                    .collect();
                debug!(
                    "{}: failing categories {}",
                    file.short_path.display(),
                    categories.join(", ")
                );
            }
            FileResult::from_report(file.short_path.clone(), file.year.clone(), records, report)
        }
        Err(e) => {
            warn!("Skipping {}: {e}", file.short_path.display());
            FileResult::Unreadable {
                path: file.short_path.clone(),
                year: file.year.clone(),
                error: describe(&e),
            }
        }
    }
}

fn run_file(path: &Path, suite: Suite, options: &SuiteOptions) -> Result<(usize, RunReport)> {
    let mut reader = RecordReader::open(path)?;
    let Some(header) = reader.next().transpose()? else {
        return Ok((0, RunReport::new(Vec::new())));
    };

    let mut run = FileRun::start(suite, options, &header);
    for row in reader {
        run.push(&row?);
    }
    Ok((run.records(), run.finish()))
}

fn describe(error: &BallotGuardError) -> String {
    error
        .detail()
        .map_or_else(|| error.to_string(), |detail| format!("{error}: {detail}"))
}

#[cfg(test)]
#[path = "check_processing_tests.rs"]
mod tests;
