use super::failures::FailureSet;
use super::predicates::{
    has_consecutive_whitespace, has_leading_or_trailing_whitespace, has_line_break, has_tab,
    is_non_alphanumeric,
};
use super::{Check, DefectCategory, ExampleLimit, RecordScope};

/// Per-cell hygiene rule. A row fails when any of its cells is bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    ConsecutiveSpaces,
    LeadingAndTrailingSpaces,
    NonAlphanumericEntries,
    PrematureLineBreaks,
    TabCharacters,
}

impl ValueRule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConsecutiveSpaces => "ConsecutiveSpaces",
            Self::LeadingAndTrailingSpaces => "LeadingAndTrailingSpaces",
            Self::NonAlphanumericEntries => "NonAlphanumericEntries",
            Self::PrematureLineBreaks => "PrematureLineBreaks",
            Self::TabCharacters => "TabCharacters",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ConsecutiveSpaces => "consecutive whitespace characters",
            Self::LeadingAndTrailingSpaces => "leading or trailing whitespace characters",
            Self::NonAlphanumericEntries => "only non-alphanumeric characters",
            Self::PrematureLineBreaks => "newline characters",
            Self::TabCharacters => "tab characters",
        }
    }

    #[must_use]
    pub fn is_bad_value(self, value: &str) -> bool {
        match self {
            Self::ConsecutiveSpaces => has_consecutive_whitespace(value),
            Self::LeadingAndTrailingSpaces => has_leading_or_trailing_whitespace(value),
            Self::NonAlphanumericEntries => is_non_alphanumeric(value),
            Self::PrematureLineBreaks => has_line_break(value),
            Self::TabCharacters => has_tab(value),
        }
    }
}

/// Row check driven by a [`ValueRule`]. Row numbers start at 1 with the first
/// record passed to [`Check::test`].
#[derive(Debug, Clone)]
pub struct ValueCheck {
    rule: ValueRule,
    current_row: usize,
    failures: FailureSet,
}

impl ValueCheck {
    #[must_use]
    pub fn new(rule: ValueRule) -> Self {
        Self {
            rule,
            current_row: 0,
            failures: FailureSet::new(),
        }
    }
}

impl Check for ValueCheck {
    fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Row
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::ValueHygiene
    }

    fn test(&mut self, record: &[String]) {
        self.current_row += 1;
        if record.iter().any(|cell| self.rule.is_bad_value(cell)) {
            self.failures.insert(self.current_row, record);
        }
    }

    fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn render_failures(&self, limit: ExampleLimit) -> String {
        let mut message = format!(
            "There are {} rows that have entries with {}:\n",
            self.failures.len(),
            self.rule.description()
        );
        self.failures.render_into(&mut message, limit);
        message
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
