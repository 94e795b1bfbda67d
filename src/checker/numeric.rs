//! Vote-count parsing and candidate-name carve-outs shared by the numeric checks.

/// Parse a vote cell as a finite decimal.
///
/// Surrounding whitespace is ignored. Redaction markers (`*`, `-`), blanks and
/// non-finite values (`inf`, `NaN`) yield `None`: the cell is skipped rather
/// than treated as a defect.
#[must_use]
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Candidate names that describe an aggregate over/under-vote adjustment row.
///
/// Matches `over/under` and `under/over` anywhere, ignoring case and all
/// whitespace (`Total Over / Under`, `Under/ Over Votes`), and the exact
/// name `under votes`.
#[must_use]
pub fn is_aggregate_candidate(candidate: &str) -> bool {
    let compact: String = candidate
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    compact.contains("over/under")
        || compact.contains("under/over")
        || candidate.trim().to_lowercase() == "under votes"
}

/// Candidate names that mark a turnout-percentage row.
#[must_use]
pub fn is_percentage_candidate(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    ["%", "pct", "percent"]
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Whether `value` is a whole number (`3` and `3.0`, but not `3.1`).
#[must_use]
#[allow(clippy::float_cmp)] // fract() of an integral value is exactly zero
pub fn is_whole(value: f64) -> bool {
    value.fract() == 0.0
}

/// Tolerant equality for sums of vote counts.
#[must_use]
pub fn counts_equal(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod tests;
