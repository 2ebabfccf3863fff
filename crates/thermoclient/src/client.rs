//! The thermal-monitoring API client.
//!
//! `ThermalClient` owns the shared transport and an optional response cache;
//! the per-endpoint accessors live in the generated [`crate::api`] module.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::cache::ResponseCache;
use crate::config::{ClientConfig, ConfigError};
use crate::transport::Transport;

/// Client for the IR thermal-monitoring backend.
pub struct ThermalClient {
    transport: Transport,
    cache: Option<ResponseCache>,
}

impl ThermalClient {
    /// Build a client against an explicit base URL with a default HTTP
    /// client.
    pub fn new(base_url: Url) -> Self {
        Self {
            transport: Transport::new(reqwest::Client::new(), base_url),
            cache: None,
        }
    }

    /// Build a client from the environment (`THERMAL_API_BASE_URL`, default
    /// `http://127.0.0.1:8000`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?.base_url))
    }

    /// Replace the underlying HTTP client. Timeout and TLS policy belong to
    /// the `reqwest::Client` passed here.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = Transport::new(client, self.transport.base_url().clone());
        self
    }

    /// Attach a response cache consulted by the `*_cached` accessors.
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The attached response cache, if any.
    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Cache read used by generated `*_cached` accessors. Any cache failure
    /// degrades to a miss.
    pub(crate) async fn cache_lookup<T: DeserializeOwned>(
        &self,
        operation: &str,
        key: &Value,
    ) -> Option<T> {
        let cache = self.cache.as_ref()?;
        match cache.lookup(operation, key).await {
            Ok(Some(payload)) => match serde_json::from_value(payload) {
                Ok(typed) => Some(typed),
                Err(error) => {
                    tracing::debug!(operation, %error, "cached payload failed to decode");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                tracing::debug!(operation, %error, "cache lookup failed");
                None
            }
        }
    }

    /// Cache write used by generated `*_cached` accessors. Failures are
    /// dropped; the live response has already been produced.
    pub(crate) async fn cache_store<T: Serialize>(&self, operation: &str, key: &Value, value: &T) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        let Ok(payload) = serde_json::to_value(value) else {
            return;
        };
        if let Err(error) = cache.store(operation, key, &payload).await {
            tracing::debug!(operation, %error, "cache store failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cache_helpers_are_inert_without_a_cache() {
        let client = ThermalClient::new(Url::parse("http://127.0.0.1:8000").unwrap());

        let miss: Option<Value> = client.cache_lookup("get_zones", &Value::Null).await;
        assert!(miss.is_none());

        // Store without a cache is a no-op rather than an error.
        client.cache_store("get_zones", &Value::Null, &Value::Null).await;
    }

    #[tokio::test]
    async fn cache_roundtrip_through_helpers() {
        let client = ThermalClient::new(Url::parse("http://127.0.0.1:8000").unwrap())
            .with_cache(ResponseCache::in_memory().await.unwrap());

        client
            .cache_store("get_health", &Value::Null, &serde_json::json!({"status": "ok"}))
            .await;

        let hit: Option<Value> = client.cache_lookup("get_health", &Value::Null).await;
        assert_eq!(hit, Some(serde_json::json!({"status": "ok"})));
    }
}
