use serde::Serialize;

use crate::checker::{ExampleLimit, FileResult, Suite};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter {
    suite: Suite,
    limit: ExampleLimit,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(suite: Suite) -> Self {
        Self {
            suite,
            limit: ExampleLimit::Unbounded,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: ExampleLimit) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    results: Vec<JsonFileResult>,
}

#[derive(Serialize)]
struct Summary {
    suite: String,
    total_files: usize,
    passed: usize,
    failed: usize,
}

#[derive(Serialize)]
struct JsonFileResult {
    path: String,
    year: String,
    status: &'static str,
    records: usize,
    failures: Vec<JsonFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonFailure {
    rule: &'static str,
    category: &'static str,
    count: usize,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[FileResult]) -> Result<String> {
        let failed = results.iter().filter(|r| r.is_failed()).count();

        let output = JsonOutput {
            summary: Summary {
                suite: self.suite.to_string(),
                total_files: results.len(),
                passed: results.len() - failed,
                failed,
            },
            results: results.iter().map(|r| self.convert_result(r)).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl JsonFormatter {
    fn convert_result(&self, result: &FileResult) -> JsonFileResult {
        let failures = result
            .report()
            .map(|report| {
                report
                    .failing_checks()
                    .map(|check| JsonFailure {
                        rule: check.name(),
                        category: check.category().as_str(),
                        count: check.failure_count(),
                        message: check.render_failures(self.limit),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let error = match result {
            FileResult::Unreadable { error, .. } => Some(error.clone()),
            FileResult::Passed { .. } | FileResult::Failed { .. } => None,
        };

        JsonFileResult {
            path: result.path().display().to_string(),
            year: result.year().to_string(),
            status: result.status(),
            records: result.records(),
            failures,
            error,
        }
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
