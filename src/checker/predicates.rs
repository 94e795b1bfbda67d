//! Stateless cell predicates used by the header and value checks.

use std::sync::LazyLock;

use regex::Regex;

static CONSECUTIVE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("Invalid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").expect("Invalid regex"));
static WORD_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w").expect("Invalid regex"));

#[must_use]
pub fn has_consecutive_whitespace(cell: &str) -> bool {
    CONSECUTIVE_WHITESPACE.is_match(cell)
}

#[must_use]
pub fn has_whitespace(cell: &str) -> bool {
    WHITESPACE.is_match(cell)
}

#[must_use]
pub fn has_leading_or_trailing_whitespace(cell: &str) -> bool {
    cell != cell.trim()
}

/// Non-empty and without a single word character (`-`, `*`, `...`).
#[must_use]
pub fn is_non_alphanumeric(cell: &str) -> bool {
    !cell.is_empty() && !WORD_CHARACTER.is_match(cell)
}

#[must_use]
pub fn has_line_break(cell: &str) -> bool {
    cell.contains('\n')
}

#[must_use]
pub fn has_tab(cell: &str) -> bool {
    cell.contains('\t')
}

/// Every cell is empty or whitespace-only. An empty record is blank.
#[must_use]
pub fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
#[path = "predicates_tests.rs"]
mod tests;
