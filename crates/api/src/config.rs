//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `GOALPOST_HOST` - Bind address (default: 0.0.0.0)
//! - `GOALPOST_PORT` - Listen port (default: 3001)
//! - `GOALPOST_DATA_DIR` - Directory holding `goals.json`, `users.json`, and
//!   `categories.json` (default: current directory)
//! - `GOALPOST_LEGACY_RESPONSES` - Reproduce the legacy status-code quirks
//!   (default: false)
//! - `GOALPOST_LOG_JSON` - Emit logs as JSON lines (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How handlers pair HTTP status codes with envelope bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// HTTP status always equals the envelope `status`, and every response
    /// is an envelope.
    #[default]
    Corrected,
    /// Copies the legacy service's status-code and body pairing: gift success
    /// answers 500, `/v1/me` without a user answers HTTP 200 with a 400 body,
    /// challenge answers an empty body or plain text. Faults still answer
    /// with envelopes.
    Legacy,
}

impl ResponseMode {
    /// Whether legacy quirks are enabled.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the three snapshots
    pub data_dir: PathBuf,
    /// Status-code pairing for handler responses
    pub response_mode: ResponseMode,
    /// Emit JSON-formatted logs
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3001,
            data_dir: PathBuf::from("."),
            response_mode: ResponseMode::default(),
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("GOALPOST_HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|e| {
                ConfigError::InvalidEnvVar("GOALPOST_HOST".to_string(), e.to_string())
            })?,
            None => defaults.host,
        };
        let port = match lookup("GOALPOST_PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("GOALPOST_PORT".to_string(), e.to_string())
            })?,
            None => defaults.port,
        };
        let data_dir = lookup("GOALPOST_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let legacy = lookup("GOALPOST_LEGACY_RESPONSES")
            .map(|value| parse_flag("GOALPOST_LEGACY_RESPONSES", &value))
            .transpose()?
            .unwrap_or(false);
        let response_mode = if legacy {
            ResponseMode::Legacy
        } else {
            ResponseMode::Corrected
        };

        let log_json = lookup("GOALPOST_LOG_JSON")
            .map(|value| parse_flag("GOALPOST_LOG_JSON", &value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            data_dir,
            response_mode,
            log_json,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag (`1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`).
fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
