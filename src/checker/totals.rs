//! Checks comparing vote breakdown components against the `votes` total.

use std::collections::BTreeSet;

use super::classifier::RowClassifier;
use super::failures::FailureSet;
use super::numeric::{counts_equal, is_aggregate_candidate, parse_number};
use super::{Check, DefectCategory, ExampleLimit, RecordScope, Row};

/// Components of the four-method breakdown. `absentee` is not one of them.
const METHOD_COMPONENTS: [&str; 4] = ["early_voting", "election_day", "mail", "provisional"];

/// Sum of the cells at `indices`, counting unparseable cells as zero. `None`
/// when no cell parses at all.
fn component_sum(row: &[String], indices: &[usize]) -> Option<f64> {
    let parsed: Vec<f64> = indices
        .iter()
        .filter_map(|&i| parse_number(&row[i]))
        .collect();
    if parsed.is_empty() {
        None
    } else {
        Some(parsed.iter().sum())
    }
}

/// How the breakdown sum must relate to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    /// Breakdown must not exceed `votes`.
    AtMost,
    /// Breakdown must equal `votes`.
    Exact,
}

/// Flags rows whose breakdown components add up to more than `votes`.
///
/// When the header is exactly a known complete schema (as a set of trimmed,
/// lowercased names) the components must add up to `votes` exactly instead.
#[derive(Debug, Clone)]
pub struct VoteBreakdownTotals {
    header: Row,
    classifier: RowClassifier,
    votes_index: Option<usize>,
    component_indices: Vec<usize>,
    comparison: Comparison,
    current_row: usize,
    failures: FailureSet,
}

impl VoteBreakdownTotals {
    /// Build with only the "at most" comparison.
    #[must_use]
    pub fn new(header: &[String]) -> Self {
        Self::with_exact_schema(header, std::iter::empty::<&str>())
    }

    /// Build, requiring exact sums when the header names equal `exact_schema`.
    #[must_use]
    pub fn with_exact_schema<I, S>(header: &[String], exact_schema: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classifier = RowClassifier::new(header);
        let schema: BTreeSet<String> = exact_schema
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .collect();
        let names: BTreeSet<String> = classifier.normalized_names().iter().cloned().collect();
        let comparison = if !schema.is_empty() && names == schema {
            Comparison::Exact
        } else {
            Comparison::AtMost
        };

        Self {
            header: header.to_vec(),
            votes_index: classifier.votes_index(),
            component_indices: classifier.component_indices(),
            classifier,
            comparison,
            current_row: 0,
            failures: FailureSet::new(),
        }
    }

    fn component_names(&self) -> Vec<&str> {
        self.component_indices
            .iter()
            .map(|&i| self.header[i].as_str())
            .collect()
    }

    fn is_violation(&self, record: &[String]) -> bool {
        let Some(votes_index) = self.votes_index else {
            return false;
        };
        if self.component_indices.is_empty() || !self.classifier.matches_width(record) {
            return false;
        }
        if self
            .classifier
            .candidate(record)
            .is_some_and(is_aggregate_candidate)
        {
            return false;
        }
        let Some(votes) = parse_number(&record[votes_index]) else {
            return false;
        };
        let Some(breakdown) = component_sum(record, &self.component_indices) else {
            return false;
        };

        match self.comparison {
            Comparison::AtMost => breakdown > votes && !counts_equal(breakdown, votes),
            Comparison::Exact => !counts_equal(breakdown, votes),
        }
    }
}

impl Check for VoteBreakdownTotals {
    fn name(&self) -> &'static str {
        "VoteBreakdownTotals"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::NumericConsistency
    }

    fn test(&mut self, record: &[String]) {
        self.current_row += 1;
        if self.is_violation(record) {
            self.failures.insert(self.current_row, record);
        }
    }

    fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        let relation = match self.comparison {
            Comparison::AtMost => "is greater than",
            Comparison::Exact => "does not equal",
        };
        let mut message = format!(
            "There are {} rows where the sum of {:?} {relation} 'votes':\n\n\tHeaders: {:?}:",
            self.failures.len(),
            self.component_names(),
            self.header
        );
        self.failures.render_into(&mut message, limit);
        message
    }
}

/// Flags rows where early voting, election day, mail and provisional counts do
/// not add up to `votes`.
///
/// Only active when the header carries all four method columns and `votes`.
#[derive(Debug, Clone)]
pub struct VoteMethodTotals {
    header: Row,
    width: usize,
    /// `votes` index and the four method indices, when all are present.
    columns: Option<(usize, Vec<usize>)>,
    current_row: usize,
    failures: FailureSet,
}

impl VoteMethodTotals {
    #[must_use]
    pub fn new(header: &[String]) -> Self {
        let classifier = RowClassifier::new(header);
        let methods: Option<Vec<usize>> = METHOD_COMPONENTS
            .iter()
            .map(|name| classifier.index_of(name))
            .collect();
        let columns = classifier.votes_index().zip(methods);

        Self {
            header: header.to_vec(),
            width: classifier.width(),
            columns,
            current_row: 0,
            failures: FailureSet::new(),
        }
    }

    fn is_violation(&self, record: &[String]) -> bool {
        let Some((votes_index, method_indices)) = &self.columns else {
            return false;
        };
        if record.len() != self.width {
            return false;
        }
        let Some(votes) = parse_number(&record[*votes_index]) else {
            return false;
        };
        component_sum(record, method_indices).is_some_and(|sum| !counts_equal(sum, votes))
    }
}

impl Check for VoteMethodTotals {
    fn name(&self) -> &'static str {
        "VoteMethodTotals"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::NumericConsistency
    }

    fn test(&mut self, record: &[String]) {
        self.current_row += 1;
        if self.is_violation(record) {
            self.failures.insert(self.current_row, record);
        }
    }

    fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        let mut message = format!(
            "There are {} rows where the sum of {METHOD_COMPONENTS:?} does not equal 'votes':\n\n\
             \tHeaders: {:?}:",
            self.failures.len(),
            self.header
        );
        self.failures.render_into(&mut message, limit);
        message
    }
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;
