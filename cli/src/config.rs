//! Settings for the command-line tool
//!
//! Loaded from a TOML file (`clusplan.toml` unless `--config` says otherwise).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// CLI configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Exit status policy
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level filter (default: "clusplan=warn")
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// `text` or `json` (default: text)
    #[serde(default)]
    pub format: OutputFormat,

    /// Colorize text output (default: true)
    #[serde(default = "default_color")]
    pub color: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PolicyConfig {
    /// Treat warnings as failures (default: false)
    #[serde(default)]
    pub fail_on_warnings: bool,
}

fn default_log_level() -> String {
    "clusplan=warn".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
