use std::collections::BTreeMap;
use std::fmt::Write;

use super::{ExampleLimit, Row};

/// Offending rows keyed by row number, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureSet {
    rows: BTreeMap<usize, Row>,
}

impl FailureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `row` as failing at `row_number`. A later insert for the same
    /// number replaces the earlier one.
    pub fn insert(&mut self, row_number: usize, row: &[String]) {
        self.rows.insert(row_number, row.to_vec());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn contains(&self, row_number: usize) -> bool {
        self.rows.contains_key(&row_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().map(|(number, row)| (*number, row))
    }

    /// Append `\n\tRow N: [...]` lines for up to `limit` entries, then a
    /// truncation marker if entries remain.
    pub fn render_into(&self, message: &mut String, limit: ExampleLimit) {
        render_entries(
            message,
            self.iter(),
            self.len(),
            limit,
            |out, number, row| {
                let _ = write!(out, "\n\tRow {number}: {row:?}");
            },
        );
    }
}

/// Pull entries from `entries` until `limit` is reached, writing each with
/// `write_entry`. `total` is the full entry count used for the omitted tally.
pub(crate) fn render_entries<'a, I, F>(
    message: &mut String,
    entries: I,
    total: usize,
    limit: ExampleLimit,
    mut write_entry: F,
) where
    I: Iterator<Item = (usize, &'a Row)>,
    F: FnMut(&mut String, usize, &Row),
{
    let mut shown = 0;
    for (number, row) in entries {
        if limit.is_reached(shown) {
            let _ = write!(
                message,
                "\n\t[Truncated to {shown} examples, {} more omitted]",
                total - shown
            );
            return;
        }
        write_entry(message, number, row);
        shown += 1;
    }
}

#[cfg(test)]
#[path = "failures_tests.rs"]
mod tests;
