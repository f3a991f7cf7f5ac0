//! Configuration for the docs consumer
//!
//! Everything is read from environment variables with defaults that match a
//! locally running dev server. CLI flags in `main.rs` override these values.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Base URL of the documentation API when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default file name for `save_to_file`
pub const DEFAULT_MARKDOWN_OUTPUT: &str = "api-documentation.md";

/// Default file name for `export_metadata`
pub const DEFAULT_METADATA_OUTPUT: &str = "api-metadata.json";

/// Default local architecture file inspected by `check`
pub const DEFAULT_LOCAL_DOCS_FILE: &str = "API_ARCHITECTURE.md";

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment, only used to pick the log format
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load an environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme + authority of the docs API, without trailing slash
    pub base_url: String,
    pub markdown_output: PathBuf,
    pub metadata_output: PathBuf,
    pub local_docs_file: PathBuf,
}

impl Config {
    /// Replace the base URL, applying the same validation as `DOCS_API_BASE_URL`.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url("--base-url", base_url)?;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            markdown_output: PathBuf::from(DEFAULT_MARKDOWN_OUTPUT),
            metadata_output: PathBuf::from(DEFAULT_METADATA_OUTPUT),
            local_docs_file: PathBuf::from(DEFAULT_LOCAL_DOCS_FILE),
        }
    }
}

impl FromEnv for Config {
    /// Reads from environment variables with defaults:
    /// - DOCS_API_BASE_URL: defaults to http://localhost:3000
    /// - DOCS_MARKDOWN_OUTPUT: defaults to api-documentation.md
    /// - DOCS_METADATA_OUTPUT: defaults to api-metadata.json
    /// - DOCS_LOCAL_FILE: defaults to API_ARCHITECTURE.md
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(
            "DOCS_API_BASE_URL",
            &env_or_default("DOCS_API_BASE_URL", DEFAULT_BASE_URL),
        )?;

        Ok(Self {
            base_url,
            markdown_output: env_or_default("DOCS_MARKDOWN_OUTPUT", DEFAULT_MARKDOWN_OUTPUT)
                .into(),
            metadata_output: env_or_default("DOCS_METADATA_OUTPUT", DEFAULT_METADATA_OUTPUT)
                .into(),
            local_docs_file: env_or_default("DOCS_LOCAL_FILE", DEFAULT_LOCAL_DOCS_FILE).into(),
        })
    }
}

fn normalize_base_url(key: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::ParseError {
            key: key.to_string(),
            details: format!("'{}' is not an http(s) URL", raw),
        });
    }

    Ok(trimmed.to_string())
}
