//! Runtime configuration read from the environment (and an optional `.env` file).

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::core::client::DEFAULT_BASE_URL;

/// Environment variable holding the backend base URL.
pub const ENV_BASE_URL: &str = "ESG_API_BASE_URL";
/// Overall HTTP timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "ESG_HTTP_TIMEOUT_SECS";
/// Response cache TTL in seconds; unset or `0` disables the cache.
pub const ENV_CACHE_TTL_SECS: &str = "ESG_CACHE_TTL_SECS";
/// `1`/`true` turns on the standard retry policy.
pub const ENV_RETRY: &str = "ESG_RETRY";
/// Log filter used when `RUST_LOG` is not set.
pub const ENV_LOG_LEVEL: &str = "ESG_LOG_LEVEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{ENV_BASE_URL} is not a valid URL: {source}")]
    InvalidBaseUrl { source: url::ParseError },
    #[error("{name} must be a whole number of seconds, got `{value}`")]
    InvalidSeconds { name: &'static str, value: String },
    #[error("{ENV_RETRY} must be a boolean, got `{0}`")]
    InvalidFlag(String),
}

/// Settings shared by the library client and the command-line front end.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub base_url: Url,
    pub timeout: Option<Duration>,
    pub cache_ttl: Option<Duration>,
    pub retry: bool,
    pub log_level: String,
}

impl DashboardConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is present but malformed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(raw_url.trim())
            .map_err(|source| ConfigError::InvalidBaseUrl { source })?;

        let timeout = seconds(&lookup, ENV_TIMEOUT_SECS)?;
        let cache_ttl = seconds(&lookup, ENV_CACHE_TTL_SECS)?;

        let retry = match lookup(ENV_RETRY) {
            None => false,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" | "off" => false,
                "1" | "true" | "yes" | "on" => true,
                _ => return Err(ConfigError::InvalidFlag(v)),
            },
        };

        let log_level = lookup(ENV_LOG_LEVEL).unwrap_or_else(|| "info".to_string());

        Ok(Self {
            base_url,
            timeout,
            cache_ttl,
            retry,
            log_level,
        })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            timeout: None,
            cache_ttl: None,
            retry: false,
            log_level: "info".to_string(),
        }
    }
}

fn seconds<F>(lookup: &F, name: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidSeconds {
            name,
            value: value.clone(),
        })?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}
