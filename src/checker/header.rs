//! Checks that inspect only the header record.

use std::collections::BTreeSet;

use super::predicates::has_whitespace;
use super::{Check, DefectCategory, ExampleLimit, RecordScope, Row};

/// Last header seen by a header check and the entries it objected to.
#[derive(Debug, Clone, Default)]
struct HeaderFindings {
    header: Row,
    offending: Vec<String>,
}

impl HeaderFindings {
    fn record(&mut self, header: &[String], is_bad: impl Fn(&str) -> bool) {
        self.header = header.to_vec();
        self.offending = header.iter().filter(|h| is_bad(h)).cloned().collect();
    }

    fn failure_count(&self) -> usize {
        usize::from(!self.offending.is_empty())
    }

    fn render(&self, problem: &str) -> String {
        let count = self.offending.len();
        let noun = if count == 1 { "entry" } else { "entries" };
        format!(
            "Header {:?} {problem} ({count} offending {noun}: {:?}).",
            self.header, self.offending
        )
    }
}

macro_rules! header_check {
    ($(#[$meta:meta])* $name:ident, $problem:literal, $is_bad:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            findings: HeaderFindings,
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Check for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn scope(&self) -> RecordScope {
                RecordScope::Header
            }

            fn category(&self) -> DefectCategory {
                DefectCategory::Structural
            }

            fn test(&mut self, record: &[String]) {
                self.findings.record(record, $is_bad);
            }

            fn failure_count(&self) -> usize {
                self.findings.failure_count()
            }

            fn render_failures(&self, _limit: ExampleLimit) -> String {
                self.findings.render($problem)
            }
        }
    };
}

header_check!(
    /// Flags header cells that are exactly the empty string.
    EmptyHeaders,
    "has empty entries",
    str::is_empty
);

header_check!(
    /// Flags header cells containing an upper-case character.
    LowercaseHeaders,
    "should only contain lowercase characters",
    |h: &str| h.chars().any(char::is_uppercase)
);

header_check!(
    /// Flags header cells named `unknown`, ignoring case and padding.
    UnknownHeaders,
    "has unknown entries",
    |h: &str| h.trim().eq_ignore_ascii_case("unknown")
);

header_check!(
    /// Flags header cells containing any whitespace character.
    WhitespaceInHeaders,
    "contains whitespace characters",
    has_whitespace
);

/// Flags a header that lacks any of a configured set of column names.
///
/// Names are compared exactly; a `County` column does not satisfy `county`.
#[derive(Debug, Clone)]
pub struct MissingHeaders {
    required: BTreeSet<String>,
    findings: HeaderFindings,
}

impl MissingHeaders {
    #[must_use]
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            findings: HeaderFindings::default(),
        }
    }
}

impl Check for MissingHeaders {
    fn name(&self) -> &'static str {
        "MissingHeaders"
    }

    fn scope(&self) -> RecordScope {
        RecordScope::Header
    }

    fn category(&self) -> DefectCategory {
        DefectCategory::Structural
    }

    fn test(&mut self, record: &[String]) {
        let present: BTreeSet<&str> = record.iter().map(String::as_str).collect();
        self.findings.header = record.to_vec();
        self.findings.offending = self
            .required
            .iter()
            .filter(|name| !present.contains(name.as_str()))
            .cloned()
            .collect();
    }

    fn failure_count(&self) -> usize {
        self.findings.failure_count()
    }

    fn render_failures(&self, _limit: ExampleLimit) -> String {
        self.findings.render("is missing entries")
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
