//! Configuration management for the home controller client
//!
//! Configuration is read once at startup: built-in defaults, then an
//! optional TOML file, then environment variables. The resulting
//! [`AppConfig`] is immutable for the lifetime of the process.

use crate::error::{HomeError, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf, time::Duration};
use url::Url;

/// Default backend location when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Backend connection settings
    pub backend: ClientConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "http://192.168.1.50:8000")
    pub base_url: String,

    /// Request timeout; the HTTP stack default applies when unset
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,

    /// Enable structured JSON logging
    pub json_format: bool,

    /// Log to file (path)
    pub file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Settings for a backend at `base_url` with no timeout override
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let mut config: AppConfig = builder.build()?.try_deserialize()?;
        config.apply_env()?;
        config.backend.base_url = normalize_base_url(&config.backend.base_url);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Override the base URL (e.g. from the command line)
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.backend.base_url = normalize_base_url(base_url);
        self.validate()?;
        Ok(self)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var("HOME_CONTROLLER_URL") {
            self.backend.base_url = url;
        }

        if let Ok(timeout) = env::var("HOME_CONTROLLER_TIMEOUT") {
            let secs: u64 = timeout.trim().parse().map_err(|e| {
                HomeError::config(format!("Invalid HOME_CONTROLLER_TIMEOUT: {e}"))
            })?;
            self.backend.timeout = Some(Duration::from_secs(secs));
        }

        if let Ok(level) = env::var("RUST_LOG") {
            self.logging.level = level;
        }

        if let Ok(file) = env::var("HOME_CONTROLLER_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }

        if let Ok(json) = env::var("HOME_CONTROLLER_LOG_JSON") {
            self.logging.json_format = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.backend.base_url;
        if base_url.is_empty() {
            return Err(HomeError::config("Base URL cannot be empty"));
        }

        let url = Url::parse(base_url)
            .map_err(|e| HomeError::config(format!("Invalid base URL {base_url}: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(HomeError::config("Base URL must use http or https scheme"));
        }

        if url.host_str().is_none() {
            return Err(HomeError::config("Base URL must include a host"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(HomeError::config(
                "Base URL cannot carry a query string or fragment",
            ));
        }

        if self.backend.timeout.is_some_and(|t| t.is_zero()) {
            return Err(HomeError::config("Timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Trim whitespace and trailing slashes so that `base + "/ac/off"` has a single separator
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
