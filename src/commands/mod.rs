mod check;
mod check_processing;
pub mod config;
mod context;
pub mod init;
mod suites;

pub use check::run_check;
pub use check_processing::{validate_file, validate_files};
pub use config::{run_config, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use suites::{format_suites, run_suites};
