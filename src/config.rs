//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any lookup
//! is made.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `DOG_API_BASE_URL` - API root (default: `https://dog.ceo/api`)
//! - `HTTP_TIMEOUT_SECONDS` - Per-request timeout (default: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub dog_api_base_url: String,
    pub http_timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Self {
        let dog_api_base_url =
            env::var("DOG_API_BASE_URL").unwrap_or_else(|_| "https://dog.ceo/api".to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            dog_api_base_url,
            http_timeout_seconds,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dog_api_base_url` is not an HTTP(S) URL
    /// - `http_timeout_seconds` is 0 or larger than 300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.dog_api_base_url.starts_with("http://")
            && !self.dog_api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "DOG_API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.dog_api_base_url
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Dog API: {}", self.dog_api_base_url);
        tracing::debug!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
