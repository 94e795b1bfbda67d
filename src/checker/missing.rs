use super::classifier::RowClassifier;
use super::failures::FailureSet;
use super::{Check, DefectCategory, ExampleLimit, RecordScope, Row};

/// Flags rows that lack a value for one required field.
///
/// The field is located by trimmed, case-insensitive header match. When the
/// header has no such column the check never fails. A row too short to reach
/// the column counts as missing the value.
#[derive(Debug, Clone)]
pub struct MissingValue {
    field: String,
    header: Row,
    field_index: Option<usize>,
    current_row: usize,
    failures: FailureSet,
}

impl MissingValue {
    #[must_use]
    pub fn new(field: impl Into<String>, header: &[String]) -> Self {
        let field = field.into();
        let field_index = RowClassifier::new(header).index_of(&field);
        Self {
            field,
            header: header.to_vec(),
            field_index,
            current_row: 0,
            failures: FailureSet::new(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Check for MissingValue {
    fn name(&self) -> &'static str {
        "MissingValue"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::MissingField
    }

    fn test(&mut self, record: &[String]) {
        self.current_row += 1;
        let Some(index) = self.field_index else {
            return;
        };

        let missing = record.get(index).is_none_or(|value| value.trim().is_empty());
        if missing {
            self.failures.insert(self.current_row, record);
        }
    }

    fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        let mut message = format!(
            "There are {} rows that are missing a {}:\n\n\tHeaders: {:?}:",
            self.failures.len(),
            self.field,
            self.header
        );
        self.failures.render_into(&mut message, limit);
        message
    }
}

#[cfg(test)]
#[path = "missing_tests.rs"]
mod tests;
