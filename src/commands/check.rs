use log::info;

use crate::checker::{ExampleLimit, FileResult};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config};
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, failure_log,
    print_error_full,
};
use crate::scanner::{
    CSV_EXTENSION, CsvFile, DirectoryScanner, FileScanner, GlobFilter, explicit_files,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

use super::check_processing::validate_files;
use super::context::{append_log, load_config};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error_full(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run one suite over the discovered files and report the results.
///
/// # Errors
/// Returns an error if the configuration is invalid, the root cannot be
/// scanned, or the log file cannot be written. Unreadable CSV files are
/// reported as failed files instead.
pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    // 3. Discover files
    let files = discover_files(args, &config)?;
    info!(
        "Discovered {} CSV files under {}",
        files.len(),
        args.root.display()
    );

    // 4. Validate
    let results = validate_files(&files, args.suite, &config.suite_options());
    let failed = results.iter().filter(|r| r.is_failed()).count();
    info!("{} of {} files failed {}", failed, results.len(), args.suite);

    // 5. Failure log
    let limit = config.example_limit();
    if let Some(log_path) = &args.log_file {
        let log_limit = if args.truncate_log_file {
            limit
        } else {
            ExampleLimit::Unbounded
        };
        append_log(log_path, &failure_log(args.suite, &results, log_limit))?;
    }

    // 6. Console output
    let output = format_output(args, cli.color.into(), &results, limit)?;
    match args.format {
        OutputFormat::Json => println!("{output}"),
        OutputFormat::Text if !cli.quiet => eprint!("{output}"),
        OutputFormat::Text => {}
    }

    if failed > 0 {
        Ok(EXIT_VALIDATION_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(max_examples) = args.max_examples {
        config.checks.max_examples = max_examples;
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.all_dirs {
        config.scanner.year_dirs_only = false;
    }
}

/// Files named with `--files`, or every matching file under the root.
pub(crate) fn discover_files(args: &CheckArgs, config: &Config) -> crate::Result<Vec<CsvFile>> {
    if !args.files.is_empty() {
        return Ok(explicit_files(&args.root, &args.files));
    }

    let filter = GlobFilter::new(vec![CSV_EXTENSION.to_string()], &config.scanner.exclude)?
        .with_year_dirs_only(config.scanner.year_dirs_only);
    DirectoryScanner::new(filter).scan(&args.root)
}

pub(crate) fn format_output(
    args: &CheckArgs,
    color: ColorMode,
    results: &[FileResult],
    limit: ExampleLimit,
) -> crate::Result<String> {
    match args.format {
        OutputFormat::Text => TextFormatter::new(args.suite, color)
            .with_limit(limit)
            .with_group_failures(args.group_failures)
            .format(results),
        OutputFormat::Json => JsonFormatter::new(args.suite)
            .with_limit(limit)
            .format(results),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
