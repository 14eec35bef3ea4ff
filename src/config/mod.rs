//! Environment configuration for the coffee shop client.
//!
//! Uses serde_yaml to load per-deployment YAML profiles with support for
//! environment variable overrides applied at deploy time.

mod auth;
mod error;

pub use auth::AuthConfig;
pub use error::ConfigError;

use serde::Deserialize;
use std::{env, fs};
use url::Url;

/// Root environment record for the client application.
///
/// Loaded once at startup and never mutated afterwards. Components that
/// need it receive it from their caller instead of reading a global.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Selects production behavior in the consuming application.
    #[serde(default)]
    pub production: bool,
    /// Base URL of the backend API server (scheme + host + port).
    pub api_server_url: String,
    /// Identity provider parameters.
    pub auth: AuthConfig,
    /// Logging verbosity: "debug", "info", "warn", "error".
    pub log_level: Option<String>,
}

impl Config {
    /// Load an environment profile from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then loads the YAML profile and applies overrides from:
    /// - `API_SERVER_URL`
    /// - `AUTH_DOMAIN_PREFIX`, `AUTH_AUDIENCE`, `AUTH_CLIENT_ID`,
    ///   `AUTH_CALLBACK_URL`
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply deployment-time overrides from environment variables.
    ///
    /// An unset variable leaves the profile value untouched.
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("API_SERVER_URL") {
            self.api_server_url = value;
        }
        if let Ok(value) = env::var("AUTH_DOMAIN_PREFIX") {
            self.auth.domain_prefix = value;
        }
        if let Ok(value) = env::var("AUTH_AUDIENCE") {
            self.auth.audience = value;
        }
        if let Ok(value) = env::var("AUTH_CLIENT_ID") {
            self.auth.client_id = value;
        }
        if let Ok(value) = env::var("AUTH_CALLBACK_URL") {
            self.auth.callback_url = value;
        }
    }

    /// Validate the record.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_server_url.is_empty() {
            return Err(ConfigError::Validation("api_server_url is required".into()));
        }
        check_url("api_server_url", &self.api_server_url)?;

        if self.auth.domain_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "auth.domain_prefix is required".into(),
            ));
        }

        if self.auth.audience.is_empty() {
            return Err(ConfigError::Validation("auth.audience is required".into()));
        }

        if self.auth.client_id.is_empty() {
            return Err(ConfigError::Validation("auth.client_id is required".into()));
        }

        if self.auth.callback_url.is_empty() {
            return Err(ConfigError::Validation(
                "auth.callback_url is required".into(),
            ));
        }
        check_url("auth.callback_url", &self.auth.callback_url)?;

        Ok(())
    }
}

/// Check that a field holds an absolute URL with scheme and authority.
fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })?;

    if !parsed.has_host() {
        return Err(ConfigError::Validation(format!(
            "{} must include a host",
            field
        )));
    }

    Ok(())
}
