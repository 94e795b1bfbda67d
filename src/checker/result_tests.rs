use std::path::PathBuf;

use super::*;
use crate::checker::{Suite, SuiteOptions, record, validate_records};

fn report(rows: &[&[&str]]) -> RunReport {
    validate_records(
        Suite::MissingValues,
        &SuiteOptions::default(),
        rows.iter().map(|cells| record(cells)),
    )
}

#[test]
fn passing_report_is_passed() {
    let result = FileResult::from_report(
        PathBuf::from("2020/a.csv"),
        "2020".to_string(),
        2,
        report(&[&["county"], &["adams"]]),
    );

    assert!(result.is_passed());
    assert!(!result.is_failed());
    assert!(result.report().is_none());
    assert_eq!(result.status(), "passed");
    assert_eq!(result.records(), 2);
    assert_eq!(result.year(), "2020");
}

#[test]
fn failing_report_is_kept() {
    let result = FileResult::from_report(
        PathBuf::from("2020/a.csv"),
        "2020".to_string(),
        2,
        report(&[&["county"], &[""]]),
    );

    assert!(result.is_failed());
    assert_eq!(result.status(), "failed");
    assert_eq!(result.report().map(RunReport::failure_count), Some(1));
    assert_eq!(result.path(), PathBuf::from("2020/a.csv"));
}

#[test]
fn unreadable_counts_as_failed() {
    let result = FileResult::Unreadable {
        path: PathBuf::from("a.csv"),
        year: String::new(),
        error: "Malformed CSV in a.csv".to_string(),
    };

    assert!(result.is_failed());
    assert_eq!(result.status(), "error");
    assert_eq!(result.records(), 0);
    assert_eq!(result.year(), "");
}
