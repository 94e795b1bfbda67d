use clap::Parser;

use ballot_guard::cli::{Cli, Commands};
use ballot_guard::commands::{run_check, run_config, run_init, run_suites};

/// Log level implied by `-v` flags when `RUST_LOG` is unset.
const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(cli.verbose, cli.quiet)),
    )
    .format_timestamp(None)
    .init();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Suites => run_suites(),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
