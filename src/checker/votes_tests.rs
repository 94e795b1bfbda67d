use super::*;
use crate::checker::record;

#[test]
fn negative_vote_without_candidate_column_fails() {
    let mut check = NegativeVotes::new(&record(&["a", "votes", "c"]));
    check.test(&record(&["a", "-1", "c"]));
    assert!(!check.passed());

    let message = check.render_failures(ExampleLimit::Unbounded);
    assert!(message.starts_with("There are 1 rows with votes that are negative"));
    assert!(message.contains(r#"Row 1: ["a", "-1", "c"]"#));
}

#[test]
fn negative_value_outside_vote_columns_passes() {
    let mut check = NegativeVotes::new(&record(&["a", "b", "c"]));
    check.test(&record(&["a", "-1", "c"]));
    assert!(check.passed());
}

#[test]
fn vote_column_names_are_trimmed() {
    let mut check = NegativeVotes::new(&record(&["a", "votes ", "c"]));
    check.test(&record(&["a", "-1", "c"]));
    assert!(!check.passed());
}

#[test]
fn breakdown_columns_are_vote_columns() {
    let header = record(&[
        "votes",
        "absentee",
        "early_voting",
        "election_day",
        "mail",
        "provisional",
    ]);
    for column in 1..header.len() {
        let mut row = record(&["1", "1", "1", "1", "1", "1"]);
        row[column] = "-3".to_string();

        let mut check = NegativeVotes::new(&header);
        check.test(&row);
        assert!(!check.passed(), "{} should be checked", header[column]);
    }
}

#[test]
fn non_negative_and_unparseable_values_pass() {
    let mut check = NegativeVotes::new(&record(&["votes", "mail"]));
    for row in [
        record(&["0", "12"]),
        record(&["*", "-"]),
        record(&["", "N/A"]),
    ] {
        check.test(&row);
    }
    assert!(check.passed());
}

#[test]
fn ragged_rows_are_skipped() {
    let mut check = NegativeVotes::new(&record(&["a", "votes", "c"]));
    check.test(&record(&["a", "-1"]));
    check.test(&record(&["a", "-1", "c", "d"]));
    assert!(check.passed());
}

#[test]
fn aggregate_candidates_are_exempt_from_sign_check() {
    let header = record(&["candidate", "votes"]);
    let mut check = NegativeVotes::new(&header);
    for candidate in ["Over/Under", "under / over", "TOTAL OVER/UNDER", "Under Votes"] {
        check.test(&record(&[candidate, "-4"]));
    }
    assert!(check.passed());

    check.test(&record(&["Jane Smith", "-4"]));
    assert_eq!(check.failure_count(), 1);
}

#[test]
fn row_numbers_count_every_record() {
    let mut check = NegativeVotes::new(&record(&["votes"]));
    check.test(&record(&["1"]));
    check.test(&record(&["2"]));
    check.test(&record(&["-3"]));

    let message = check.render_failures(ExampleLimit::Unbounded);
    assert!(message.contains(r#"Row 3: ["-3"]"#));
}

#[test]
fn fractional_votes_fail() {
    let mut check = NonIntegerVotes::new(&record(&["a", "votes", "c"]));
    check.test(&record(&["a", "1.5", "c"]));
    assert!(!check.passed());

    let message = check.render_failures(ExampleLimit::Unbounded);
    assert!(message.starts_with("There are 1 rows with votes that aren't integers"));
}

#[test]
fn whole_decimal_votes_pass() {
    let mut check = NonIntegerVotes::new(&record(&["votes", "mail"]));
    check.test(&record(&["3.0", "3"]));
    check.test(&record(&["-2", "0.00"]));
    check.test(&record(&["*", ""]));
    assert!(check.passed());
}

#[test]
fn percentage_candidates_are_exempt_from_integer_check() {
    let mut check = NonIntegerVotes::new(&record(&["candidate", "votes"]));
    for candidate in ["Turnout %", "Turnout PCT", "Percent Reporting"] {
        check.test(&record(&[candidate, "45.3"]));
    }
    assert!(check.passed());

    check.test(&record(&["Jane Smith", "45.3"]));
    assert!(!check.passed());
}

#[test]
fn categories_are_numeric() {
    let header = record(&["votes"]);
    assert_eq!(
        NegativeVotes::new(&header).category(),
        DefectCategory::NumericConsistency
    );
    assert_eq!(NonIntegerVotes::new(&header).scope(), RecordScope::Row);
}
