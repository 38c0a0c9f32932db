//! Site configuration: a versioned TOML file with named profiles.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, FeedConfig, LoggingConfig, Profile, ResolvedConfig};
