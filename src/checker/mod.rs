mod classifier;
mod duplicate;
mod failures;
mod fingerprint;
mod header;
mod missing;
mod numeric;
mod predicates;
mod report;
mod result;
mod row;
mod suite;
mod totals;
mod value;
mod votes;

pub use classifier::{ColumnRole, RowClassifier, VOTE_COMPONENTS};
pub use duplicate::DuplicateEntries;
pub use failures::FailureSet;
pub use fingerprint::{Fingerprint, fingerprint};
pub use header::{
    EmptyHeaders, LowercaseHeaders, MissingHeaders, UnknownHeaders, WhitespaceInHeaders,
};
pub use missing::MissingValue;
pub use numeric::{is_aggregate_candidate, is_percentage_candidate, parse_number};
pub use predicates::{
    has_consecutive_whitespace, has_leading_or_trailing_whitespace, has_line_break, has_tab,
    has_whitespace, is_blank, is_non_alphanumeric,
};
pub use report::{BoxedCheck, RunReport};
pub use result::FileResult;
pub use row::{EmptyRows, InconsistentNumberOfColumns};
pub use suite::{
    FileRun, Suite, SuiteOptions, default_exact_breakdown_headers, validate_records,
};
pub use totals::{VoteBreakdownTotals, VoteMethodTotals};
pub use value::{ValueCheck, ValueRule};
pub use votes::{NegativeVotes, NonIntegerVotes};

/// A single CSV record: the header or a data row.
pub type Row = Vec<String>;

/// What a check's `test` record means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordScope {
    /// The check inspects only the header record.
    Header,
    /// The check inspects every record it is given.
    Row,
}

/// Defect class a check reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefectCategory {
    Structural,
    ValueHygiene,
    NumericConsistency,
    MissingField,
    Duplicate,
}

impl DefectCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::ValueHygiene => "value-hygiene",
            Self::NumericConsistency => "numeric-consistency",
            Self::MissingField => "missing-field",
            Self::Duplicate => "duplicate",
        }
    }
}

/// Maximum number of example rows a failure message lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExampleLimit {
    #[default]
    Unbounded,
    AtMost(usize),
}

impl ExampleLimit {
    /// Whether `shown` examples already exhaust the limit.
    #[must_use]
    pub const fn is_reached(self, shown: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::AtMost(max) => shown >= max,
        }
    }
}

impl From<i64> for ExampleLimit {
    /// Negative values mean "no limit".
    fn from(value: i64) -> Self {
        usize::try_from(value).map_or(Self::Unbounded, Self::AtMost)
    }
}

/// A streaming validation rule.
///
/// Records are pushed one at a time, in file order. A check never panics on
/// malformed input: ragged rows, empty strings and non-numeric text either
/// become a recorded failure or are skipped.
pub trait Check {
    /// Stable rule name, used to order report output.
    fn name(&self) -> &'static str;

    fn scope(&self) -> RecordScope;

    fn category(&self) -> DefectCategory;

    /// Consume one record.
    fn test(&mut self, record: &[String]);

    /// Number of failures recorded so far.
    fn failure_count(&self) -> usize;

    /// True iff no failure has been recorded.
    fn passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Render a human-readable failure report listing at most `limit` examples.
    fn render_failures(&self, limit: ExampleLimit) -> String;
}

/// Build a record from string literals.
#[cfg(test)]
pub(crate) fn record(cells: &[&str]) -> Row {
    cells.iter().map(|cell| (*cell).to_string()).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
