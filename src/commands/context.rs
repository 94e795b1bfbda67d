use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};

/// Load the configuration for a command.
///
/// `--no-config` yields the defaults. An explicit path must exist; otherwise
/// the local and user config files are searched.
///
/// # Errors
/// Returns an error if a config file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Append `content` to the failure log at `path`, creating it and its parent
/// directories if needed.
///
/// # Errors
/// Returns an error if the file cannot be opened or written.
pub(crate) fn append_log(path: &Path, content: &str) -> crate::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
