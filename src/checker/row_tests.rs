use super::*;
use crate::checker::record;

#[test]
fn empty_rows() {
    let mut check = EmptyRows::new();
    assert!(check.passed());
    check.test(&record(&["a", "b", ""]));
    assert!(check.passed());

    let mut check = EmptyRows::new();
    for row in [
        record(&["", "", ""]),
        record(&["a", "b", ""]),
        record(&[" ", "\t", "\n"]),
    ] {
        check.test(&row);
    }
    assert!(!check.passed());

    let message = check.render_failures(ExampleLimit::Unbounded);
    assert!(message.starts_with("Has 2 empty rows"));
    assert!(message.contains("Row 1:"));
    assert!(!message.contains("Row 2:"));
    assert!(message.contains("Row 3:"));
}

#[test]
fn inconsistent_number_of_columns() {
    let header = record(&["a", "b", "c"]);
    let mut check = InconsistentNumberOfColumns::new(&header);
    assert!(check.passed());
    check.test(&record(&["d", "e", ""]));
    assert!(check.passed());

    let rows = [
        record(&["d", "e"]),
        record(&["d", "e", ""]),
        record(&["d", "e", "f", "g"]),
        record(&["d", "e", ""]),
    ];
    let mut check = InconsistentNumberOfColumns::new(&header);
    for row in &rows {
        check.test(row);
    }
    assert!(!check.passed());

    let message = check.render_failures(ExampleLimit::Unbounded);
    assert!(message.contains("there are 2 rows with an inconsistent number of columns"));
    assert!(message.contains(&format!("Headers (3 entries): {header:?}")));
    assert!(message.contains(&format!("Row 1 (2 entries): {:?}", rows[0])));
    assert!(!message.contains("Row 2"));
    assert!(message.contains(&format!("Row 3 (4 entries): {:?}", rows[2])));
    assert!(!message.contains("Row 4"));
}

#[test]
fn inconsistent_columns_truncates() {
    let mut check = InconsistentNumberOfColumns::new(&record(&["a", "b"]));
    for _ in 0..3 {
        check.test(&record(&["x"]));
    }

    let message = check.render_failures(ExampleLimit::AtMost(1));
    assert!(message.contains("Row 1 (1 entries)"));
    assert!(!message.contains("Row 2"));
    assert!(message.contains("[Truncated to 1 examples, 2 more omitted]"));
}
