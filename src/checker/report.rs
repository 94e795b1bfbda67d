use super::{Check, DefectCategory, ExampleLimit};

/// Boxed check as driven by a file run.
pub type BoxedCheck = Box<dyn Check + Send>;

/// Combined verdict over every check driven for one file.
pub struct RunReport {
    checks: Vec<BoxedCheck>,
}

impl RunReport {
    /// Wrap checks that have already consumed their records. Checks are
    /// ordered by rule name; checks sharing a name keep their given order.
    #[must_use]
    pub fn new(mut checks: Vec<BoxedCheck>) -> Self {
        checks.sort_by_key(|check| check.name());
        Self { checks }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed())
    }

    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    pub fn checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|check| check.as_ref() as &dyn Check)
    }

    pub fn failing_checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks().filter(|check| !check.passed())
    }

    /// Total failures recorded across every check.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.checks.iter().map(|check| check.failure_count()).sum()
    }

    /// Categories with at least one failing check, without repeats, in check order.
    #[must_use]
    pub fn failing_categories(&self) -> Vec<DefectCategory> {
        let mut categories = Vec::new();
        for check in self.failing_checks() {
            if !categories.contains(&check.category()) {
                categories.push(check.category());
            }
        }
        categories
    }

    /// One `* `-prefixed paragraph per failing check. Empty when everything passed.
    #[must_use]
    pub fn render(&self, limit: ExampleLimit) -> String {
        self.failing_checks()
            .map(|check| format!("* {}", check.render_failures(limit)))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl std::fmt::Debug for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunReport")
            .field("checks", &self.checks.iter().map(|c| c.name()).collect::<Vec<_>>())
            .field("passed", &self.passed())
            .finish()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
