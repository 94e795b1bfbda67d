use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::{BallotGuardError, Result};

use super::Config;
use super::validation::validate_config;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".ballot-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Where config files are looked for and read from.
pub trait ConfigSource {
    /// Contents of the file at `path`. A missing file is `ErrorKind::NotFound`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Directory searched for `.ballot-guard.toml`.
    fn working_dir(&self) -> Option<PathBuf>;

    /// Per-user ballot-guard config directory, if the platform has one.
    fn user_config_dir(&self) -> Option<PathBuf>;
}

/// Reads config from the process's working directory and the platform
/// config directory (`~/.config/ballot-guard` on Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct HostConfigSource;

impl ConfigSource for HostConfigSource {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn working_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ballot-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.ballot-guard.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<S: ConfigSource = HostConfigSource> {
    source: S,
}

impl Default for FileConfigLoader<HostConfigSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<HostConfigSource> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: HostConfigSource,
        }
    }
}

impl<S: ConfigSource> FileConfigLoader<S> {
    #[must_use]
    pub const fn with_source(source: S) -> Self {
        Self { source }
    }

    fn candidate_paths(&self) -> [Option<PathBuf>; 2] {
        [
            self.source.working_dir().map(|dir| dir.join(LOCAL_CONFIG_NAME)),
            self.source.user_config_dir().map(|dir| dir.join(USER_CONFIG_NAME)),
        ]
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.source.read(path).map_err(|source| BallotGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<S: ConfigSource> ConfigLoader for FileConfigLoader<S> {
    fn load(&self) -> Result<Config> {
        for path in self.candidate_paths().into_iter().flatten() {
            match self.read(&path) {
                Ok(content) => {
                    log::info!("Using configuration from {}", path.display());
                    return Self::parse_config(&content);
                }
                Err(BallotGuardError::FileRead { ref source, .. })
                    if source.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }

        log::debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self.read(path)?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
