//! Application configuration
//!
//! Configuration is read from a JSON file. Every field is optional; missing
//! fields take their defaults.
//!
//! ```json
//! {
//!   "storagePath": "/var/lib/podium/kv",
//!   "logFilter": "info,app_navigation=debug",
//!   "navigation": { "scheme": "podium", "publicDomain": "podium.app" }
//! }
//! ```

use app_navigation::{NavigationConfig, NavigationError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error(transparent)]
    Invalid(#[from] NavigationError),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Directory of the key-value store
    pub storage_path: PathBuf,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Navigation settings
    pub navigation: NavigationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("podium_kv.db"),
            log_filter: "info".to_string(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON config
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.navigation.validate()?;
        Ok(config)
    }

    /// Set the storage directory
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }
}
