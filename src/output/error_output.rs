//! Error output on stderr.
//!
//! Format: `✖ Error Type: message`, then an optional `  × detail` line and an
//! optional `  help: suggestion` line.

use std::io::Write;

use super::{ColorMode, ansi, stderr_supports_color};
use crate::error::BallotGuardError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Prints an error with its cause and a fix hint, when the error has them.
    pub fn print(&self, error: &BallotGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            error.error_type(),
            &error.to_string(),
            error.detail().as_deref(),
            error.suggestion(),
        );
    }

    /// Writes an error to `w`.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // stderr write failures have nowhere left to be reported
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

/// Prints `error` on stderr using `mode`.
pub fn print_error_full(error: &BallotGuardError, mode: ColorMode) {
    ErrorOutput::new(mode).print(error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
