//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for datapack-docs operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the configuration file fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read.
    #[error("Failed to read configuration at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid TOML or does not fit the configuration schema.
    #[error("Invalid configuration at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
