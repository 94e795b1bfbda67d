//! Sign and integrality checks over vote-count columns.

use super::classifier::RowClassifier;
use super::failures::FailureSet;
use super::numeric::{is_aggregate_candidate, is_percentage_candidate, is_whole, parse_number};
use super::{Check, DefectCategory, ExampleLimit, RecordScope, Row};

/// Shared state for checks that inspect each vote-count cell of a row.
#[derive(Debug, Clone)]
struct VoteCells {
    header: Row,
    classifier: RowClassifier,
    vote_indices: Vec<usize>,
    current_row: usize,
    failures: FailureSet,
}

impl VoteCells {
    fn new(header: &[String]) -> Self {
        let classifier = RowClassifier::new(header);
        let vote_indices = classifier.vote_count_indices();
        Self {
            header: header.to_vec(),
            classifier,
            vote_indices,
            current_row: 0,
            failures: FailureSet::new(),
        }
    }

    /// Advance the row counter and flag `record` when any parseable vote cell
    /// satisfies `is_bad`. Ragged rows and rows `exempt` by candidate name are
    /// skipped.
    fn scan(
        &mut self,
        record: &[String],
        exempt: impl Fn(&str) -> bool,
        is_bad: impl Fn(f64) -> bool,
    ) {
        self.current_row += 1;
        if !self.classifier.matches_width(record) {
            return;
        }
        if self.classifier.candidate(record).is_some_and(exempt) {
            return;
        }

        let failed = self
            .vote_indices
            .iter()
            .filter_map(|&i| parse_number(&record[i]))
            .any(is_bad);
        if failed {
            self.failures.insert(self.current_row, record);
        }
    }

    fn render(&self, problem: &str, limit: ExampleLimit) -> String {
        let mut message = format!(
            "There are {} rows with votes that {problem}:\n\n\tHeaders: {:?}:",
            self.failures.len(),
            self.header
        );
        self.failures.render_into(&mut message, limit);
        message
    }
}

/// Flags rows with a negative value in a vote-count column.
///
/// Aggregate over/under adjustment rows legitimately carry negative counts
/// and are exempt when a candidate column identifies them.
#[derive(Debug, Clone)]
pub struct NegativeVotes {
    cells: VoteCells,
}

impl NegativeVotes {
    #[must_use]
    pub fn new(header: &[String]) -> Self {
        Self {
            cells: VoteCells::new(header),
        }
    }
}

impl Check for NegativeVotes {
    fn name(&self) -> &'static str {
        "NegativeVotes"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::NumericConsistency
    }

    fn test(&mut self, record: &[String]) {
        self.cells
            .scan(record, is_aggregate_candidate, |value| value < 0.0);
    }

    fn failure_count(&self) -> usize {
        self.cells.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        self.cells.render("are negative", limit)
    }
}

/// Flags rows with a fractional value in a vote-count column.
///
/// `3` and `3.0` are whole. Turnout-percentage rows are exempt when a
/// candidate column identifies them.
#[derive(Debug, Clone)]
pub struct NonIntegerVotes {
    cells: VoteCells,
}

impl NonIntegerVotes {
    #[must_use]
    pub fn new(header: &[String]) -> Self {
        Self {
            cells: VoteCells::new(header),
        }
    }
}

impl Check for NonIntegerVotes {
    fn name(&self) -> &'static str {
        "NonIntegerVotes"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::NumericConsistency
    }

    fn test(&mut self, record: &[String]) {
        self.cells
            .scan(record, is_percentage_candidate, |value| !is_whole(value));
    }

    fn failure_count(&self) -> usize {
        self.cells.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        self.cells.render("aren't integers", limit)
    }
}

#[cfg(test)]
#[path = "votes_tests.rs"]
mod tests;
