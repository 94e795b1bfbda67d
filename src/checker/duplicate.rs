use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

use super::classifier::RowClassifier;
use super::failures::{FailureSet, render_entries};
use super::fingerprint::{Fingerprint, fingerprint_tagged};
use super::predicates::is_blank;
use super::{Check, DefectCategory, ExampleLimit, RecordScope, Row};

const PROJECTED_TAG: u8 = b'p';
const WHOLE_ROW_TAG: u8 = b'w';

/// Flags rows whose content repeats an earlier row.
///
/// Rows as wide as the header are compared on their non-vote columns only,
/// so two precinct results differing only in counts are duplicates. Ragged
/// rows are compared on their full content. Blank rows are counted for
/// numbering but never compared.
#[derive(Debug, Clone)]
pub struct DuplicateEntries {
    header: Row,
    indices_to_hash: Vec<usize>,
    current_row: usize,
    first_seen: HashMap<Fingerprint, usize>,
    failures: FailureSet,
    duplicate_of: BTreeMap<usize, usize>,
}

impl DuplicateEntries {
    #[must_use]
    pub fn new(header: &[String]) -> Self {
        let classifier = RowClassifier::new(header);
        Self {
            header: header.to_vec(),
            indices_to_hash: classifier.fingerprint_indices(),
            current_row: 0,
            first_seen: HashMap::new(),
            failures: FailureSet::new(),
            duplicate_of: BTreeMap::new(),
        }
    }

    fn fingerprint_row(&self, row: &[String]) -> Fingerprint {
        if row.len() == self.header.len() {
            fingerprint_tagged(
                PROJECTED_TAG,
                self.indices_to_hash.iter().map(|&i| row[i].as_str()),
            )
        } else {
            fingerprint_tagged(WHOLE_ROW_TAG, row.iter().map(String::as_str))
        }
    }

    /// Row number of the first occurrence of the duplicate at `row_number`.
    #[must_use]
    pub fn first_occurrence(&self, row_number: usize) -> Option<usize> {
        self.duplicate_of.get(&row_number).copied()
    }
}

impl Check for DuplicateEntries {
    fn name(&self) -> &'static str {
        "DuplicateEntries"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::Duplicate
    }

    fn test(&mut self, record: &[String]) {
        self.current_row += 1;
        if is_blank(record) {
            return;
        }

        let key = self.fingerprint_row(record);
        match self.first_seen.get(&key) {
            Some(&first) => {
                self.failures.insert(self.current_row, record);
                self.duplicate_of.insert(self.current_row, first);
            }
            None => {
                self.first_seen.insert(key, self.current_row);
            }
        }
    }

    fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        let mut message = format!(
            "{} duplicate entries detected:\n\n\tHeaders: {:?}:",
            self.failures.len(),
            self.header
        );
        render_entries(
            &mut message,
            self.failures.iter(),
            self.failures.len(),
            limit,
            |out, number, row| {
                let _ = write!(out, "\n\tRow {number}: {row:?}");
                if let Some(first) = self.first_occurrence(number) {
                    let _ = write!(out, " (duplicate of row {first})");
                }
            },
        );
        message
    }
}

#[cfg(test)]
#[path = "duplicate_tests.rs"]
mod tests;
