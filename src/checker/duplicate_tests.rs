use super::*;
use crate::checker::record;

fn header() -> Row {
    record(&["a", "votes", "c", "absentee", "early_voting"])
}

#[test]
fn distinct_rows_pass() {
    let mut check = DuplicateEntries::new(&header());
    check.test(&record(&["a", "1", "c", "1", "1"]));
    check.test(&record(&["b", "1", "c", "1", "1"]));
    check.test(&record(&["a", "1", "d", "1", "1"]));
    assert!(check.passed());
}

#[test]
fn vote_columns_are_ignored() {
    let rows = [
        record(&["a", "1", "c", "1", "1"]),
        record(&["a", "2", "c", "3", "4"]),
    ];
    let mut check = DuplicateEntries::new(&header());
    for row in &rows {
        check.test(row);
    }

    assert_eq!(check.failure_count(), 1);
    assert_eq!(check.first_occurrence(2), Some(1));
    assert_eq!(check.first_occurrence(1), None);

    let message = check.render_failures(ExampleLimit::Unbounded);
    assert!(message.starts_with("1 duplicate entries detected"));
    assert!(message.contains(&format!("Headers: {:?}", header())));
    assert!(message.contains(&format!("Row 2: {:?} (duplicate of row 1)", rows[1])));
    assert!(!message.contains("Row 1:"));
}

#[test]
fn any_column_containing_votes_is_ignored() {
    let header = record(&["office", "total_votes", "Votes_Cast"]);
    let mut check = DuplicateEntries::new(&header);
    check.test(&record(&["mayor", "1", "2"]));
    check.test(&record(&["mayor", "5", "6"]));
    assert!(!check.passed());
}

#[test]
fn non_vote_cells_are_compared_exactly() {
    let mut check = DuplicateEntries::new(&header());
    check.test(&record(&["a", "1", "c", "1", "1"]));
    check.test(&record(&["a ", "1", "c", "1", "1"]));
    check.test(&record(&["A", "1", "c", "1", "1"]));
    assert!(check.passed());
}

#[test]
fn every_later_copy_points_at_first_occurrence() {
    let mut check = DuplicateEntries::new(&header());
    for _ in 0..3 {
        check.test(&record(&["a", "1", "c", "1", "1"]));
    }

    assert_eq!(check.failure_count(), 2);
    assert_eq!(check.first_occurrence(2), Some(1));
    assert_eq!(check.first_occurrence(3), Some(1));
}

#[test]
fn ragged_rows_compare_whole_content() {
    let mut check = DuplicateEntries::new(&header());
    check.test(&record(&["a", "1"]));
    check.test(&record(&["a", "2"]));
    assert!(check.passed());

    check.test(&record(&["a", "1"]));
    assert_eq!(check.failure_count(), 1);
    assert_eq!(check.first_occurrence(3), Some(1));
}

#[test]
fn ragged_row_never_matches_full_width_row() {
    let header = record(&["a", "votes"]);
    let mut check = DuplicateEntries::new(&header);
    check.test(&record(&["x", "1"]));
    check.test(&record(&["x"]));
    assert!(check.passed());
}

#[test]
fn blank_rows_are_skipped_in_both_directions() {
    let mut check = DuplicateEntries::new(&header());
    check.test(&record(&["", "", "", "", ""]));
    check.test(&record(&[" ", "", "\t", "", ""]));
    check.test(&record(&["", "", "", "", ""]));
    assert!(check.passed());

    check.test(&record(&["a", "1", "c", "1", "1"]));
    check.test(&record(&["a", "1", "c", "1", "1"]));
    assert_eq!(check.first_occurrence(5), Some(4));
}

#[test]
fn cell_boundaries_matter() {
    let header = record(&["a", "b"]);
    let mut check = DuplicateEntries::new(&header);
    check.test(&record(&["ab", "c"]));
    check.test(&record(&["a", "bc"]));
    assert!(check.passed());
}

#[test]
fn truncated_render_counts_omitted() {
    let mut check = DuplicateEntries::new(&header());
    for _ in 0..6 {
        check.test(&record(&["a", "1", "c", "1", "1"]));
    }

    let message = check.render_failures(ExampleLimit::AtMost(2));
    assert!(message.starts_with("5 duplicate entries"));
    assert_eq!(message.matches("(duplicate of row 1)").count(), 2);
    assert!(message.contains("[Truncated to 2 examples, 3 more omitted]"));
}
