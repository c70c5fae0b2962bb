//! Client configuration.
//!
//! Settings live in a JSON file under the user's config directory
//! (`~/.config/youtubes/config.json` on Linux). A missing file yields the
//! defaults; unknown or missing keys fall back to their defaults as well.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::logger::LogLevel;
use crate::transport::MAX_RESULTS_LIMIT;

/// Default API root.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// The file could not be written.
    #[error("Failed to write config file {path}: {source}")]
    Write {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Settings for [`ApiClient`](crate::client::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root URL of the Data API.
    pub api_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Page size for list calls (1 to 50).
    pub max_results: u32,
    /// Level of the root logger.
    pub log_level: LogLevel,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_results: MAX_RESULTS_LIMIT,
            log_level: LogLevel::default(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the default location, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config.normalized())
    }

    /// Save configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Path of the default config file.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        config_file_path()
    }

    /// Clamp values the API would reject.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.max_results = self.max_results.clamp(1, MAX_RESULTS_LIMIT);
        self
    }
}

fn default_user_agent() -> String {
    format!("youtubes/{}", env!("CARGO_PKG_VERSION"))
}

fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("youtubes")
        .join("config.json")
}
