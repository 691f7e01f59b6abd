//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden from the
//! command line, and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `BASE_URL` - Fixed base for short URLs (default: derived from each request)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Link validity when a request omits it (default: 30)
//! - `CODE_LENGTH` - Length of generated shortcodes (default: 6, range: 3-20)
//! - `CODE_MAX_ATTEMPTS` - Random draws before giving up on a free code (default: 10)
//! - `BULK_LIMIT` - Maximum items per bulk request (default: 5)
//! - `CORS_ORIGINS` - Comma-separated allowed origins
//!   (default: `http://localhost:3000,http://localhost:5173`)
//!
//! State lives in memory only; restarting the process drops every link.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::application::services::link_service::{DEFAULT_BULK_LIMIT, DEFAULT_VALIDITY_MINUTES};
use crate::infrastructure::registry::{DEFAULT_MAX_ATTEMPTS, RegistryConfig};
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MIN_CODE_LENGTH};

const DEFAULT_LISTEN: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Base used for every short URL. When `None`, the base is rebuilt from
    /// the `Host` and `X-Forwarded-Proto` headers of each request.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub default_validity_minutes: i64,
    pub code_length: usize,
    pub code_max_attempts: usize,
    pub bulk_limit: usize,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_validity_minutes =
            parse_env("DEFAULT_VALIDITY_MINUTES", DEFAULT_VALIDITY_MINUTES)?;
        let code_length = parse_env("CODE_LENGTH", DEFAULT_CODE_LENGTH)?;
        let code_max_attempts = parse_env("CODE_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        let bulk_limit = parse_env("BULK_LIMIT", DEFAULT_BULK_LIMIT)?;

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_validity_minutes,
            code_length,
            code_max_attempts,
            bulk_limit,
            cors_origins,
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, listen: Option<String>, base_url: Option<String>) -> Self {
        if let Some(listen) = listen {
            self.listen_addr = listen;
        }
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.trim_end_matches('/').to_string());
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - any numeric setting is out of range
    pub fn validate(&self) -> Result<()> {
        self.listen_addr.parse::<SocketAddr>().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })?;

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.default_validity_minutes <= 0 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be greater than 0, got {}",
                self.default_validity_minutes
            );
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 1000 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 1000, got {}",
                self.code_max_attempts
            );
        }

        if self.bulk_limit == 0 || self.bulk_limit > 100 {
            anyhow::bail!(
                "BULK_LIMIT must be between 1 and 100, got {}",
                self.bulk_limit
            );
        }

        Ok(())
    }

    /// Registry settings derived from this configuration.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            code_length: self.code_length,
            max_attempts: self.code_max_attempts,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: derived from request"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!(
            "  Code length: {} ({} attempts)",
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!("  Bulk limit: {}", self.bulk_limit);
        tracing::info!("  CORS origins: {}", self.cors_origins.join(", "));
    }
}

/// Reads `key` as `T`, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads configuration from environment variables, applies command-line
/// overrides and validates the result.
///
/// # Errors
///
/// Returns an error if parsing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(listen: Option<String>, base_url: Option<String>) -> Result<Config> {
    let config = Config::from_env()?.with_overrides(listen, base_url);
    config.validate()?;
    Ok(config)
}
