//! Client configuration.
//!
//! The base URL comes from the `THERMAL_API_BASE_URL` environment variable
//! when set, otherwise the documented default of `http://127.0.0.1:8000`.

use thiserror::Error;
use url::Url;

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "THERMAL_API_BASE_URL";

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Errors building a client configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    /// Build a configuration from an explicit base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref();
        let base_url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            source,
        })?;
        Ok(Self { base_url })
    }

    /// Build a configuration from the environment, falling back to the
    /// default base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(raw)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
    }

    #[test]
    fn explicit_base_url() {
        let config = ClientConfig::new("http://thermal.local:9000").unwrap();
        assert_eq!(config.base_url.port(), Some(9000));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ClientConfig::new("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }
}
