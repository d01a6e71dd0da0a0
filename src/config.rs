//! TOML configuration for navigation timing and the external compiler.

use crate::error::ConfigError;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "datapack-docs.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub navigation: NavigationConfig,
    pub compiler: CompilerConfig,
}

/// Timing of the hash-sync scroll and expand steps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Estimated smooth-scroll cost per pixel travelled.
    pub scroll_ms_per_px: f64,
    /// Upper bound on the estimated scroll duration.
    pub max_scroll_ms: u64,
    /// Distance from the target at which a scroll counts as settled.
    pub settle_tolerance_px: f64,
    /// Delay before expanding a disclosure matching the fragment.
    pub expand_delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_ms_per_px: 0.5,
            max_scroll_ms: 1500,
            settle_tolerance_px: 1.0,
            expand_delay_ms: 100,
        }
    }
}

impl NavigationConfig {
    /// Estimated time for a smooth scroll over `distance_px`.
    pub fn scroll_duration(&self, distance_px: f64) -> Duration {
        let ms = (distance_px.abs() * self.scroll_ms_per_px).clamp(0.0, self.max_scroll_ms as f64);
        Duration::from_micros((ms * 1000.0).round() as u64)
    }

    pub fn expand_delay(&self) -> Duration {
        Duration::from_millis(self.expand_delay_ms)
    }
}

/// How to invoke the external compiler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub command: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: "jmc".to_string(),
            args: vec!["--stdin-json".to_string()],
            timeout_secs: 30,
        }
    }
}

impl CompilerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./datapack-docs.toml` and then
    /// `<config dir>/datapack-docs/config.toml` are tried, falling back to defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let path = PathBuf::from(expand_tilde(path).as_ref());
            tracing::debug!(path = %path.display(), "Loading configuration");
            return Self::from_file(&path);
        }

        for candidate in default_locations() {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Loading configuration");
                return Self::from_file(&candidate);
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("datapack-docs").join("config.toml"));
    }
    locations
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
