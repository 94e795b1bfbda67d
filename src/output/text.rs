use std::fmt::Write;

use indexmap::IndexMap;

use super::{OutputFormatter, ansi, stderr_supports_color};
use crate::checker::{ExampleLimit, FileResult, Suite};
use crate::error::Result;

const BLOCK_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stderr is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Console report: one block per failing file, then a summary.
pub struct TextFormatter {
    suite: Suite,
    limit: ExampleLimit,
    use_colors: bool,
    group_failures: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(suite: Suite, mode: ColorMode) -> Self {
        Self {
            suite,
            limit: ExampleLimit::Unbounded,
            use_colors: Self::should_use_colors(mode),
            group_failures: false,
        }
    }

    /// Cap the number of example rows each failure message lists.
    #[must_use]
    pub const fn with_limit(mut self, limit: ExampleLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Wrap failing files of one year in `::group::`/`::endgroup::` markers.
    #[must_use]
    pub const fn with_group_failures(mut self, group: bool) -> Self {
        self.group_failures = group;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stderr_supports_color(),
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_blocks<'a>(&self, output: &mut String, results: impl Iterator<Item = &'a FileResult>) {
        for result in results {
            write_block(output, self.suite, result, self.limit, self.use_colors);
        }
    }

    fn write_grouped(&self, output: &mut String, failed: &[&FileResult]) {
        let mut groups: IndexMap<&str, Vec<&FileResult>> = IndexMap::new();
        let mut ungrouped = Vec::new();
        for result in failed {
            if result.year().is_empty() {
                ungrouped.push(*result);
            } else {
                groups.entry(result.year()).or_default().push(*result);
            }
        }
        groups.sort_unstable_keys();

        for (year, results) in &groups {
            writeln!(output, "::group::{year}").ok();
            self.write_blocks(output, results.iter().copied());
            writeln!(output, "::endgroup::").ok();
        }
        self.write_blocks(output, ungrouped.into_iter());
    }

    fn write_summary(&self, output: &mut String, results: &[FileResult]) {
        let failed = results.iter().filter(|r| r.is_failed()).count();
        let passed = results.len() - failed;

        writeln!(output, "{}", "-".repeat(BLOCK_WIDTH)).ok();
        writeln!(
            output,
            "Checked {} {} with {}: {passed} passed, {failed} failed",
            results.len(),
            if results.len() == 1 { "file" } else { "files" },
            self.suite
        )
        .ok();
        writeln!(output).ok();
        if failed == 0 {
            writeln!(output, "{}", self.paint("OK", ansi::GREEN)).ok();
        } else {
            let verdict = format!("FAILED (failures={failed})");
            writeln!(output, "{}", self.paint(&verdict, ansi::RED)).ok();
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[FileResult]) -> Result<String> {
        let mut output = String::new();
        let failed: Vec<&FileResult> = results.iter().filter(|r| r.is_failed()).collect();

        if self.group_failures {
            self.write_grouped(&mut output, &failed);
        } else {
            self.write_blocks(&mut output, failed.into_iter());
        }
        self.write_summary(&mut output, results);

        Ok(output)
    }
}

/// The console block for one file, without colors. `None` when the file passed.
#[must_use]
pub fn failure_block(suite: Suite, result: &FileResult, limit: ExampleLimit) -> Option<String> {
    if result.is_passed() {
        return None;
    }
    let mut output = String::new();
    write_block(&mut output, suite, result, limit, false);
    Some(output)
}

/// Every failing file's block, in the order given.
#[must_use]
pub fn failure_log(suite: Suite, results: &[FileResult], limit: ExampleLimit) -> String {
    results
        .iter()
        .filter_map(|result| failure_block(suite, result, limit))
        .collect()
}

fn write_block(
    output: &mut String,
    suite: Suite,
    result: &FileResult,
    limit: ExampleLimit,
    use_colors: bool,
) {
    let (label, body) = match result {
        FileResult::Passed { .. } => return,
        FileResult::Failed { report, .. } => ("FAIL", report.render(limit)),
        FileResult::Unreadable { error, .. } => ("ERROR", error.clone()),
    };
    let label = if use_colors {
        format!("{}{}{label}{}", ansi::BOLD, ansi::RED, ansi::RESET)
    } else {
        label.to_string()
    };

    writeln!(output, "{}", "=".repeat(BLOCK_WIDTH)).ok();
    writeln!(output, "{label}: {suite} [{}]", result.path().display()).ok();
    writeln!(output, "{}", "-".repeat(BLOCK_WIDTH)).ok();
    writeln!(output, "{body}").ok();
    writeln!(output).ok();
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
