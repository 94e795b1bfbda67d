//! Row-shape checks.

use std::fmt::Write;

use super::failures::{FailureSet, render_entries};
use super::predicates::is_blank;
use super::{Check, DefectCategory, ExampleLimit, RecordScope, Row};

/// Flags rows whose cells are all empty or whitespace-only.
#[derive(Debug, Clone, Default)]
pub struct EmptyRows {
    current_row: usize,
    failures: FailureSet,
}

impl EmptyRows {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Check for EmptyRows {
    fn name(&self) -> &'static str {
        "EmptyRows"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::Structural
    }

    fn test(&mut self, record: &[String]) {
        self.current_row += 1;
        if is_blank(record) {
            self.failures.insert(self.current_row, record);
        }
    }

    fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        let mut message = format!("Has {} empty rows:\n", self.failures.len());
        self.failures.render_into(&mut message, limit);
        message
    }
}

/// Flags rows whose length differs from the header's.
#[derive(Debug, Clone)]
pub struct InconsistentNumberOfColumns {
    header: Row,
    current_row: usize,
    failures: FailureSet,
}

impl InconsistentNumberOfColumns {
    #[must_use]
    pub fn new(header: &[String]) -> Self {
        Self {
            header: header.to_vec(),
            current_row: 0,
            failures: FailureSet::new(),
        }
    }
}

impl Check for InconsistentNumberOfColumns {
    fn name(&self) -> &'static str {
        "InconsistentNumberOfColumns"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::Structural
    }

    fn test(&mut self, record: &[String]) {
        self.current_row += 1;
        if record.len() != self.header.len() {
            self.failures.insert(self.current_row, record);
        }
    }

    fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        let width = self.header.len();
        let mut message = format!(
            "Header has {width} entries, but there are {} rows with an inconsistent number of columns:\n\n\
             \tHeaders ({width} entries): {:?}:",
            self.failures.len(),
            self.header
        );
        render_entries(
            &mut message,
            self.failures.iter(),
            self.failures.len(),
            limit,
            |out, number, row| {
                let _ = write!(out, "\n\tRow {number} ({} entries): {row:?}", row.len());
            },
        );
        message
    }
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod tests;
