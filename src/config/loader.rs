use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/uikata/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("uikata").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the
    /// caller asked for this file specifically.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates structural invariants.
    ///
    /// Checks:
    /// - The swatch row has at least one entry
    /// - The tick interval is non-zero
    ///
    /// Name resolution (screen and swatch names) happens when the app is
    /// constructed, where the typed vocabularies live.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.swatches.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one palette swatch must be configured".to_string(),
            });
        }

        if self.defaults.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "Tick interval must be at least 1 ms".to_string(),
            });
        }

        Ok(())
    }
}
