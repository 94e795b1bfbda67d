mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, ConfigSource, FileConfigLoader, HostConfigSource, LOCAL_CONFIG_NAME};
pub use model::{ChecksConfig, Config, DEFAULT_MAX_EXAMPLES, ScannerConfig};
pub use validation::validate_config;
