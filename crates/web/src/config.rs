//! Stylist configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GEMINI_API_KEY` - Google Gemini API key
//!
//! ## Optional
//! - `STYLIST_HOST` - Bind address (default: 127.0.0.1)
//! - `STYLIST_PORT` - Listen port (default: 3000)
//! - `STYLIST_DATA_DIR` - Directory holding the JSON collections (default: data)
//! - `GEMINI_MODEL` - Model id (default: models/gemini-2.5-flash)
//! - `GEMINI_TIMEOUT_SECS` - Per-request model timeout (default: 60)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Stylist application configuration.
#[derive(Debug, Clone)]
pub struct StylistConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding `accounts.json` and `designs.json`
    pub data_dir: PathBuf,
    /// Gemini API configuration
    pub gemini: GeminiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Gemini API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key for the Generative Language API
    pub api_key: SecretString,
    /// Model id, e.g. `models/gemini-2.5-flash`
    pub model: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl StylistConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STYLIST_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STYLIST_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STYLIST_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STYLIST_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("STYLIST_DATA_DIR", "data"));

        let gemini = GeminiConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            data_dir,
            gemini,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the persisted account collection.
    #[must_use]
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join("accounts.json")
    }

    /// Path of the persisted design collection.
    #[must_use]
    pub fn designs_path(&self) -> PathBuf {
        self.data_dir.join("designs.json")
    }
}

impl GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = get_required_secret("GEMINI_API_KEY")?;
        let model = get_env_or_default("GEMINI_MODEL", "models/gemini-2.5-flash");
        let timeout_secs = get_env_or_default("GEMINI_TIMEOUT_SECS", "60")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("GEMINI_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_key,
            model,
            timeout_secs,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
