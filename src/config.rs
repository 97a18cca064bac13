//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::board::{BoardOptions, ReconcileStrategy};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub board: BoardOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Activities API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let (config, skipped) = Self::load_default_with_errors();
        for e in skipped {
            tracing::warn!("{}", e);
        }
        config
    }

    /// Like [`Config::load_default`], but hands back the files that exist
    /// and failed to load instead of logging them. Callers that install
    /// logging from the config itself report these afterwards.
    pub fn load_default_with_errors() -> (Self, Vec<ConfigError>) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("activity-board").join("config.toml")),
            Some(PathBuf::from("./activity-board.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// First existing file that loads wins; env-only config otherwise
    fn load_first(paths: &[PathBuf]) -> (Self, Vec<ConfigError>) {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {:?}", path);
                    return (config, skipped);
                }
                Err(e) => skipped.push(e),
            }
        }

        (Self::from_env(), skipped)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ACTIVITY_BOARD_API_URL") {
            self.api.base_url = url;
        }
        if let Some(secs) = lookup("ACTIVITY_BOARD_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        if let Some(strategy) = lookup("ACTIVITY_BOARD_RECONCILE") {
            match strategy.to_lowercase().as_str() {
                "refetch" => self.board.signup_reconcile = ReconcileStrategy::Refetch,
                "optimistic" => self.board.signup_reconcile = ReconcileStrategy::Optimistic,
                other => tracing::warn!("Ignoring unknown reconcile strategy {:?}", other),
            }
        }

        if let Some(level) = lookup("ACTIVITY_BOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ACTIVITY_BOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Activity Board Configuration
#
# Environment variables override these settings:
# - ACTIVITY_BOARD_API_URL
# - ACTIVITY_BOARD_TIMEOUT_SECS
# - ACTIVITY_BOARD_RECONCILE
# - ACTIVITY_BOARD_LOG_LEVEL
# - ACTIVITY_BOARD_LOG_FORMAT

[api]
# Base URL of the activities API
base_url = "http://localhost:8000"

# Per-request timeout (seconds)
request_timeout_secs = 10

[board]
# How long status messages stay visible (ms)
message_timeout_ms = 4000

# After a signup: "refetch" reloads the catalog, "optimistic" patches it locally
signup_reconcile = "refetch"

[logging]
# Log level (trace, debug, info, warn, error)
level = "warn"

# Log format (pretty, json)
format = "pretty"
"#
    .to_string()
}
