use crate::EXIT_SUCCESS;
use crate::checker::Suite;

#[must_use]
pub fn run_suites() -> i32 {
    print!("{}", format_suites());
    EXIT_SUCCESS
}

/// One line per suite: its name padded to a column, then what it checks.
#[must_use]
pub fn format_suites() -> String {
    let width = Suite::ALL
        .iter()
        .map(|suite| suite.as_str().len())
        .max()
        .unwrap_or_default();
    Suite::ALL
        .iter()
        .map(|suite| format!("{:<width$}  {}\n", suite.as_str(), suite.description()))
        .collect()
}

#[cfg(test)]
#[path = "suites_tests.rs"]
mod tests;
