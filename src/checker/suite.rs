use std::fmt;
use std::str::FromStr;

use super::report::{BoxedCheck, RunReport};
use super::{
    Check, DuplicateEntries, EmptyHeaders, EmptyRows, InconsistentNumberOfColumns,
    LowercaseHeaders, MissingHeaders, MissingValue, NegativeVotes, NonIntegerVotes, RecordScope,
    Row, UnknownHeaders, ValueCheck, ValueRule, VoteBreakdownTotals, VoteMethodTotals,
    WhitespaceInHeaders,
};

/// A named selection of checks run together over a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    FileFormat,
    DuplicateEntries,
    MissingValues,
    VoteBreakdownTotals,
    VoteMethodTotals,
}

impl Suite {
    pub const ALL: [Self; 5] = [
        Self::FileFormat,
        Self::DuplicateEntries,
        Self::MissingValues,
        Self::VoteBreakdownTotals,
        Self::VoteMethodTotals,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileFormat => "file-format",
            Self::DuplicateEntries => "duplicate-entries",
            Self::MissingValues => "missing-values",
            Self::VoteBreakdownTotals => "vote-breakdown-totals",
            Self::VoteMethodTotals => "vote-method-totals",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FileFormat => "header shape, cell whitespace, column counts and vote values",
            Self::DuplicateEntries => "rows repeating earlier content, ignoring vote counts",
            Self::MissingValues => "rows lacking a value for a required field",
            Self::VoteBreakdownTotals => "breakdown components adding up past 'votes'",
            Self::VoteMethodTotals => "voting-method components not adding up to 'votes'",
        }
    }

    /// Construct this suite's checks for a file with `header`.
    #[must_use]
    pub fn build(self, header: &[String], options: &SuiteOptions) -> Vec<BoxedCheck> {
        match self {
            Self::FileFormat => file_format_checks(header, options),
            Self::DuplicateEntries => vec![Box::new(DuplicateEntries::new(header)) as BoxedCheck],
            Self::MissingValues => options
                .required_fields
                .iter()
                .map(|field| Box::new(MissingValue::new(field.as_str(), header)) as BoxedCheck)
                .collect(),
            Self::VoteBreakdownTotals => {
                let check = VoteBreakdownTotals::with_exact_schema(
                    header,
                    &options.exact_breakdown_headers,
                );
                vec![Box::new(check) as BoxedCheck]
            }
            Self::VoteMethodTotals => vec![Box::new(VoteMethodTotals::new(header)) as BoxedCheck],
        }
    }
}

fn file_format_checks(header: &[String], options: &SuiteOptions) -> Vec<BoxedCheck> {
    let mut checks: Vec<BoxedCheck> = vec![
        Box::new(EmptyHeaders::new()),
        Box::new(LowercaseHeaders::new()),
        Box::new(UnknownHeaders::new()),
        Box::new(WhitespaceInHeaders::new()),
        Box::new(ValueCheck::new(ValueRule::ConsecutiveSpaces)),
        Box::new(EmptyRows::new()),
        Box::new(ValueCheck::new(ValueRule::LeadingAndTrailingSpaces)),
        Box::new(ValueCheck::new(ValueRule::PrematureLineBreaks)),
        Box::new(ValueCheck::new(ValueRule::TabCharacters)),
        Box::new(InconsistentNumberOfColumns::new(header)),
        Box::new(NegativeVotes::new(header)),
        Box::new(NonIntegerVotes::new(header)),
    ];
    if !options.required_headers.is_empty() {
        checks.push(Box::new(MissingHeaders::new(
            options.required_headers.iter().cloned(),
        )));
    }
    if options.non_alphanumeric {
        checks.push(Box::new(ValueCheck::new(ValueRule::NonAlphanumericEntries)));
    }
    checks
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suite {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|suite| suite.as_str() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|suite| suite.as_str()).collect();
                format!("Unknown suite: {s} (expected one of: {})", names.join(", "))
            })
    }
}

/// Per-run settings that shape which checks a suite builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteOptions {
    /// Fields checked by the missing-values suite.
    pub required_fields: Vec<String>,
    /// Header names the file-format suite requires. Empty disables the check.
    pub required_headers: Vec<String>,
    /// Header set for which breakdown components must equal `votes` exactly.
    pub exact_breakdown_headers: Vec<String>,
    /// Add the non-alphanumeric entry check to the file-format suite.
    pub non_alphanumeric: bool,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            required_fields: ["county", "precinct", "office"].map(String::from).into(),
            required_headers: Vec::new(),
            exact_breakdown_headers: default_exact_breakdown_headers(),
            non_alphanumeric: false,
        }
    }
}

/// The complete precinct-level layout with a four-method breakdown.
#[must_use]
pub fn default_exact_breakdown_headers() -> Vec<String> {
    [
        "county",
        "precinct",
        "office",
        "district",
        "party",
        "candidate",
        "votes",
        "early_voting",
        "election_day",
        "mail",
        "provisional",
    ]
    .map(String::from)
    .into()
}

/// Streaming driver for one file: every record goes to the suite's checks in
/// file order.
pub struct FileRun {
    checks: Vec<BoxedCheck>,
    records: usize,
}

impl FileRun {
    /// Build the suite from `header` and feed the header to every check, so
    /// the header is row 1 and the first data row is row 2.
    #[must_use]
    pub fn start(suite: Suite, options: &SuiteOptions, header: &[String]) -> Self {
        let mut checks = suite.build(header, options);
        for check in &mut checks {
            check.test(header);
        }
        Self { checks, records: 1 }
    }

    /// Feed one data row to every row-scope check.
    pub fn push(&mut self, row: &[String]) {
        self.records += 1;
        for check in &mut self.checks {
            if check.scope() == RecordScope::Row {
                check.test(row);
            }
        }
    }

    /// Records consumed so far, header included.
    #[must_use]
    pub const fn records(&self) -> usize {
        self.records
    }

    #[must_use]
    pub fn finish(self) -> RunReport {
        RunReport::new(self.checks)
    }
}

/// Run `suite` over a file's records, the first being the header.
///
/// A file without records yields an empty, passing report.
#[must_use]
pub fn validate_records<I>(suite: Suite, options: &SuiteOptions, records: I) -> RunReport
where
    I: IntoIterator<Item = Row>,
{
    let mut records = records.into_iter();
    let Some(header) = records.next() else {
        return RunReport::new(Vec::new());
    };

    let mut run = FileRun::start(suite, options, &header);
    for row in records {
        run.push(&row);
    }
    run.finish()
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
