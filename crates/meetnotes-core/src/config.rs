//! Configuration management for the meeting notes dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use url::Url;

use crate::{Error, Result};

/// Environment variable prefix, e.g. `MEETNOTES_WEB_PORT=3000`
const ENV_PREFIX: &str = "MEETNOTES";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Web server configuration
    #[serde(default)]
    pub web: WebConfig,

    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base origin of the backend, e.g. `http://127.0.0.1:5000`.
    ///
    /// Request paths carry their own `/api` prefix, so this is a bare
    /// `scheme://host[:port]`.
    #[serde(default = "default_api_origin")]
    pub origin: String,
}

impl ApiConfig {
    /// Validate the configured origin and reduce it to `scheme://host[:port]`.
    ///
    /// An origin written as `http://host:port/api` is accepted with a warning
    /// and the `/api` suffix is dropped, since every request path already
    /// starts with `/api`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrigin`] if the URL cannot be parsed, has no
    /// scheme/host origin, or carries a path other than `/api`.
    pub fn resolve_origin(&self) -> Result<String> {
        let raw = self.origin.as_str();
        let url = Url::parse(raw).map_err(|e| Error::invalid_origin(raw, e))?;

        match url.path().trim_end_matches('/') {
            "" => {}
            "/api" => warn!(
                origin = %raw,
                "API origin ends in /api; request paths already include it, so the suffix is ignored"
            ),
            other => {
                return Err(Error::invalid_origin(
                    raw,
                    format!("unexpected path '{other}', expected a bare origin"),
                ));
            }
        }

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(Error::invalid_origin(raw, "URL has no scheme/host origin"));
        }
        Ok(origin.ascii_serialization())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_api_origin() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_api_origin(),
        }
    }
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
    /// Load configuration from an optional `config.*` file in the working
    /// directory and `MEETNOTES_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("_"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit file; the format follows the extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
