use super::*;
use crate::checker::{ExampleLimit, record};

fn precinct_records() -> Vec<Row> {
    vec![
        record(&["county", "precinct", "absentee", "votes"]),
        record(&["a", "b", "1", "2"]),
        record(&["a", "b", "2", "3"]),
        record(&["", "c", "1", "2"]),
        record(&["c", "d", "3", "2"]),
    ]
}

fn failing_names(report: &RunReport) -> Vec<&'static str> {
    report.failing_checks().map(|check| check.name()).collect()
}

#[test]
fn duplicate_suite_flags_later_copy() {
    let report = validate_records(
        Suite::DuplicateEntries,
        &SuiteOptions::default(),
        precinct_records(),
    );

    assert!(!report.passed());
    let rendered = report.render(ExampleLimit::Unbounded);
    assert!(rendered.contains(r#"Row 3: ["a", "b", "2", "3"] (duplicate of row 2)"#));
    assert!(!rendered.contains("Row 2:"));
}

#[test]
fn missing_values_suite_flags_blank_county() {
    let report = validate_records(
        Suite::MissingValues,
        &SuiteOptions::default(),
        precinct_records(),
    );

    assert_eq!(failing_names(&report), ["MissingValue"]);
    let rendered = report.render(ExampleLimit::Unbounded);
    assert!(rendered.contains("missing a county"));
    assert!(rendered.contains(r#"Row 4: ["", "c", "1", "2"]"#));
    assert!(!rendered.contains("missing a precinct"));
    assert!(!rendered.contains("missing a office"));
}

#[test]
fn breakdown_suite_flags_sum_over_total() {
    let report = validate_records(
        Suite::VoteBreakdownTotals,
        &SuiteOptions::default(),
        precinct_records(),
    );

    assert_eq!(failing_names(&report), ["VoteBreakdownTotals"]);
    let rendered = report.render(ExampleLimit::Unbounded);
    assert!(rendered.contains(r#"Row 5: ["c", "d", "3", "2"]"#));
    assert_eq!(rendered.matches("\n\tRow ").count(), 1);
}

#[test]
fn method_suite_is_inert_without_method_columns() {
    let report = validate_records(
        Suite::VoteMethodTotals,
        &SuiteOptions::default(),
        precinct_records(),
    );
    assert!(report.passed());
}

#[test]
fn clean_file_passes_every_suite() {
    let records = vec![
        record(&["county", "precinct", "office", "candidate", "votes", "mail"]),
        record(&["adams", "1", "mayor", "jane", "10", "4"]),
        record(&["adams", "2", "mayor", "jane", "7", "7"]),
    ];
    for suite in Suite::ALL {
        let report = validate_records(suite, &SuiteOptions::default(), records.clone());
        assert!(report.passed(), "{suite} failed: {}", report.render(ExampleLimit::Unbounded));
    }
}

#[test]
fn file_format_reports_header_and_row_defects() {
    let records = vec![
        record(&["County", "votes", ""]),
        record(&["a", "-1", "x"]),
        record(&["a  b", "1"]),
    ];
    let report = validate_records(Suite::FileFormat, &SuiteOptions::default(), records);

    let names = failing_names(&report);
    assert_eq!(
        names,
        [
            "ConsecutiveSpaces",
            "EmptyHeaders",
            "InconsistentNumberOfColumns",
            "LowercaseHeaders",
            "NegativeVotes",
        ]
    );

    let rendered = report.render(ExampleLimit::Unbounded);
    assert!(rendered.contains(r#"Row 2: ["a", "-1", "x"]"#));
    assert!(rendered.contains(r#"Row 3 (2 entries): ["a  b", "1"]"#));
}

#[test]
fn header_counts_as_row_one() {
    let records = vec![record(&["votes "]), record(&["1"])];
    let report = validate_records(Suite::FileFormat, &SuiteOptions::default(), records);

    let names = failing_names(&report);
    assert!(names.contains(&"WhitespaceInHeaders"));
    assert!(names.contains(&"LeadingAndTrailingSpaces"));
    assert!(
        report
            .render(ExampleLimit::Unbounded)
            .contains(r#"Row 1: ["votes "]"#)
    );
}

#[test]
fn optional_file_format_checks() {
    let records = vec![record(&["county", "votes"]), record(&["-", "1"])];

    let report = validate_records(Suite::FileFormat, &SuiteOptions::default(), records.clone());
    assert!(report.passed());

    let options = SuiteOptions {
        required_headers: vec!["county".into(), "precinct".into()],
        non_alphanumeric: true,
        ..SuiteOptions::default()
    };
    let report = validate_records(Suite::FileFormat, &options, records);
    assert_eq!(
        failing_names(&report),
        ["MissingHeaders", "NonAlphanumericEntries"]
    );
}

#[test]
fn required_fields_come_from_options() {
    let options = SuiteOptions {
        required_fields: vec!["precinct".into(), "candidate".into()],
        ..SuiteOptions::default()
    };
    let checks = Suite::MissingValues.build(&record(&["county", "precinct"]), &options);
    assert_eq!(checks.len(), 2);

    let report = validate_records(Suite::MissingValues, &options, precinct_records());
    assert!(report.passed());
}

#[test]
fn file_run_counts_records() {
    let options = SuiteOptions::default();
    let header = record(&["county", "precinct", "office"]);
    let mut run = FileRun::start(Suite::MissingValues, &options, &header);
    assert_eq!(run.records(), 1);

    run.push(&record(&["a", "1", "mayor"]));
    run.push(&record(&["a", "", "mayor"]));
    assert_eq!(run.records(), 3);

    let report = run.finish();
    assert_eq!(report.check_count(), 3);
    assert!(report.render(ExampleLimit::Unbounded).contains("Row 3:"));
}

#[test]
fn empty_file_yields_empty_passing_report() {
    let report = validate_records(Suite::FileFormat, &SuiteOptions::default(), Vec::new());
    assert!(report.passed());
    assert_eq!(report.check_count(), 0);
}

#[test]
fn header_only_file_checks_header() {
    let report = validate_records(
        Suite::FileFormat,
        &SuiteOptions::default(),
        vec![record(&["Unknown"])],
    );
    let names = failing_names(&report);
    assert_eq!(names, ["LowercaseHeaders", "UnknownHeaders"]);
}

#[test]
fn suite_names_parse() {
    for suite in Suite::ALL {
        assert_eq!(suite.as_str().parse::<Suite>(), Ok(suite));
        assert_eq!(suite.to_string(), suite.as_str());
        assert!(!suite.description().is_empty());
    }
    assert_eq!("file_format".parse::<Suite>(), Ok(Suite::FileFormat));
    assert_eq!(
        " Vote_Breakdown_Totals ".parse::<Suite>(),
        Ok(Suite::VoteBreakdownTotals)
    );
}

#[test]
fn unknown_suite_lists_valid_names() {
    let err = "totals".parse::<Suite>().unwrap_err();
    assert!(err.contains("Unknown suite: totals"));
    assert!(err.contains("vote-method-totals"));
}

#[test]
fn default_options() {
    let options = SuiteOptions::default();
    assert_eq!(options.required_fields, ["county", "precinct", "office"]);
    assert!(options.required_headers.is_empty());
    assert!(!options.non_alphanumeric);
    assert_eq!(options.exact_breakdown_headers.len(), 11);
}
