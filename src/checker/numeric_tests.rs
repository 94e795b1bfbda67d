use super::*;

#[test]
fn parses_integers_and_decimals() {
    assert_eq!(parse_number("3"), Some(3.0));
    assert_eq!(parse_number("3.0"), Some(3.0));
    assert_eq!(parse_number("-1.2"), Some(-1.2));
    assert_eq!(parse_number(" 15 "), Some(15.0));
}

#[test]
fn redaction_markers_do_not_parse() {
    for cell in ["", " ", "*", "-", "N/A", "1,234", "abc"] {
        assert_eq!(parse_number(cell), None, "{cell:?} should not parse");
    }
}

#[test]
fn non_finite_values_do_not_parse() {
    for cell in ["inf", "-inf", "NaN", "infinity"] {
        assert_eq!(parse_number(cell), None, "{cell:?} should not parse");
    }
}

#[test]
fn whole_numbers() {
    assert!(is_whole(3.0));
    assert!(is_whole(-2.0));
    assert!(is_whole(0.0));
    assert!(!is_whole(3.1));
    assert!(!is_whole(-0.01));
}

#[test]
fn aggregate_candidates_ignore_case_and_whitespace() {
    assert!(is_aggregate_candidate("Total Over / Under"));
    assert!(is_aggregate_candidate("Under/ Over Votes"));
    assert!(is_aggregate_candidate("OVER/UNDER"));
    assert!(is_aggregate_candidate("  under votes "));
    assert!(is_aggregate_candidate("Under Votes"));
}

#[test]
fn ordinary_candidates_are_not_aggregate() {
    assert!(!is_aggregate_candidate("Jane Smith"));
    assert!(!is_aggregate_candidate("Over Votes"));
    assert!(!is_aggregate_candidate("under votes total"));
    assert!(!is_aggregate_candidate(""));
}

#[test]
fn percentage_candidates_match_substrings() {
    assert!(is_percentage_candidate("Turnout %"));
    assert!(is_percentage_candidate("Turnout PCT"));
    assert!(is_percentage_candidate("Percentage"));
    assert!(is_percentage_candidate("voter percent"));
    assert!(!is_percentage_candidate("Jane Smith"));
}

#[test]
fn counts_compare_with_tolerance() {
    assert!(counts_equal(15.0, 15.0));
    assert!(counts_equal(0.1 + 0.2, 0.3));
    assert!(!counts_equal(15.0, 16.0));
}
