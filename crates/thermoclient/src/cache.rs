//! SQLite-backed response cache.
//!
//! Entries are keyed by `(operation name, canonical JSON of the argument)`
//! and expire on a per-entry TTL. The cache sits entirely outside the
//! request path's error contract: the generated `*_cached` accessors treat
//! any cache failure as a miss and fall back to a live request.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by cache operations. These never propagate into endpoint
/// results; callers observe them only through the direct cache API.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("connection pool error: {0}")]
    Pool(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("task error: {0}")]
    Task(String),
}

/// Configuration for the response cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Database file path, or `:memory:` for an in-memory cache.
    pub database_path: String,
    /// TTL applied by [`ResponseCache::store`].
    pub default_ttl: Duration,
    /// Maximum pooled connections. In-memory caches are pinned to one
    /// connection because each SQLite memory connection is its own database.
    pub pool_max_connections: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            database_path: ":memory:".to_string(),
            default_ttl: Duration::from_secs(30),
            pool_max_connections: 4,
        }
    }
}

impl CacheConfig {
    /// File-backed configuration with defaults.
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        Self {
            database_path: path.as_ref().to_string_lossy().to_string(),
            ..Self::default()
        }
    }
}

/// The response cache used by `*_cached` endpoint accessors.
pub struct ResponseCache {
    config: CacheConfig,
    pool: Pool<SqliteConnectionManager>,
}

impl ResponseCache {
    /// Open (and initialize) a cache for the given configuration.
    pub async fn new(config: CacheConfig) -> Result<Self, CacheError> {
        let in_memory = config.database_path == ":memory:";
        let manager = if in_memory {
            SqliteConnectionManager::memory()
        } else {
            SqliteConnectionManager::file(&config.database_path)
        };

        let max_size = if in_memory {
            1
        } else {
            config.pool_max_connections.max(1)
        };
        let pool = Pool::builder()
            .max_size(max_size)
            .max_lifetime(Some(Duration::from_secs(300)))
            .build(manager)
            .map_err(|e| CacheError::Pool(format!("failed to create connection pool: {e}")))?;

        let cache = Self { config, pool };
        cache.init_schema().await?;
        Ok(cache)
    }

    /// Open an in-memory cache with default settings.
    pub async fn in_memory() -> Result<Self, CacheError> {
        Self::new(CacheConfig::default()).await
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Canonical cache key for an argument value. `serde_json` maps are
    /// ordered, so equal arguments always serialize identically.
    pub fn arg_key(key: &Value) -> String {
        key.to_string()
    }

    async fn with_connection<F, R>(&self, f: F) -> Result<R, CacheError>
    where
        F: FnOnce(&mut rusqlite::Connection) -> rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| CacheError::Pool(format!("failed to get pooled connection: {e}")))?;
            f(&mut conn).map_err(|e| CacheError::Storage(e.to_string()))
        })
        .await
        .map_err(|e| CacheError::Task(format!("cache task failed: {e}")))?
    }

    async fn init_schema(&self) -> Result<(), CacheError> {
        self.with_connection(|conn| {
            conn.pragma_update(None, "journal_mode", "WAL").ok();
            conn.pragma_update(None, "synchronous", "NORMAL")?;

            let tx = conn.transaction()?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS responses (
                    id TEXT PRIMARY KEY,
                    operation TEXT NOT NULL,
                    arg_key TEXT NOT NULL,
                    payload TEXT NOT NULL,
                    created_at INTEGER NOT NULL,
                    expires_at INTEGER NOT NULL,
                    UNIQUE(operation, arg_key)
                )",
                [],
            )?;
            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_responses_expires ON responses(expires_at)",
                [],
            )?;
            tx.commit()
        })
        .await
    }

    /// Store a response payload under the default TTL.
    pub async fn store(
        &self,
        operation: &str,
        key: &Value,
        payload: &Value,
    ) -> Result<(), CacheError> {
        self.store_with_ttl(operation, key, payload, self.config.default_ttl)
            .await
    }

    /// Store a response payload with an explicit TTL.
    pub async fn store_with_ttl(
        &self,
        operation: &str,
        key: &Value,
        payload: &Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let id = Uuid::new_v4().to_string();
        let op = operation.to_string();
        let arg_key = Self::arg_key(key);
        let payload = payload.to_string();
        let now = Utc::now().timestamp_millis();
        let expires_at = now + ttl.as_millis() as i64;

        self.with_connection(move |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO responses
                    (id, operation, arg_key, payload, created_at, expires_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![id, op, arg_key, payload, now, expires_at],
            )?;
            Ok(())
        })
        .await?;

        tracing::debug!(operation, "cached response");
        Ok(())
    }

    /// Fetch a live (unexpired) payload for an operation + argument pair.
    pub async fn lookup(
        &self,
        operation: &str,
        key: &Value,
    ) -> Result<Option<Value>, CacheError> {
        let operation = operation.to_string();
        let arg_key = Self::arg_key(key);
        let now = Utc::now().timestamp_millis();

        let payload: Option<String> = self
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT payload FROM responses
                     WHERE operation = ?1 AND arg_key = ?2 AND expires_at > ?3",
                )?;
                match stmt.query_row(rusqlite::params![operation, arg_key, now], |row| {
                    row.get::<_, String>(0)
                }) {
                    Ok(payload) => Ok(Some(payload)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e),
                }
            })
            .await?;

        payload
            .map(|p| {
                serde_json::from_str(&p)
                    .map_err(|e| CacheError::Storage(format!("corrupt cached payload: {e}")))
            })
            .transpose()
    }

    /// Drop every entry for one operation. Returns the number removed.
    pub async fn invalidate(&self, operation: &str) -> Result<u64, CacheError> {
        let operation = operation.to_string();
        self.with_connection(move |conn| {
            let changed = conn.execute(
                "DELETE FROM responses WHERE operation = ?1",
                rusqlite::params![operation],
            )?;
            Ok(changed as u64)
        })
        .await
    }

    /// Drop every entry.
    pub async fn clear(&self) -> Result<(), CacheError> {
        self.with_connection(|conn| {
            conn.execute("DELETE FROM responses", [])?;
            Ok(())
        })
        .await
    }

    /// Remove expired entries. Returns the number removed.
    pub async fn purge_expired(&self) -> Result<u64, CacheError> {
        let now = Utc::now().timestamp_millis();
        self.with_connection(move |conn| {
            let changed = conn.execute(
                "DELETE FROM responses WHERE expires_at <= ?1",
                rusqlite::params![now],
            )?;
            Ok(changed as u64)
        })
        .await
    }

    /// Number of live entries.
    pub async fn entry_count(&self) -> Result<u64, CacheError> {
        let now = Utc::now().timestamp_millis();
        self.with_connection(move |conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM responses WHERE expires_at > ?1",
                rusqlite::params![now],
                |row| row.get(0),
            )?;
            Ok(count as u64)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn store_and_lookup_roundtrip() {
        let cache = ResponseCache::in_memory().await.unwrap();
        let key = json!({"zone_id": 7});
        let payload = json!({"zone_id": 7, "average": 36.5});

        cache.store("get_zones_average_by_zone_id", &key, &payload)
            .await
            .unwrap();

        let hit = cache
            .lookup("get_zones_average_by_zone_id", &key)
            .await
            .unwrap();
        assert_eq!(hit, Some(payload));
    }

    #[tokio::test]
    async fn distinct_arguments_are_distinct_entries() {
        let cache = ResponseCache::in_memory().await.unwrap();
        cache
            .store("op", &json!({"zone_id": 1}), &json!({"average": 1.0}))
            .await
            .unwrap();
        cache
            .store("op", &json!({"zone_id": 2}), &json!({"average": 2.0}))
            .await
            .unwrap();

        assert_eq!(cache.entry_count().await.unwrap(), 2);
        let hit = cache.lookup("op", &json!({"zone_id": 2})).await.unwrap();
        assert_eq!(hit, Some(json!({"average": 2.0})));
    }

    #[tokio::test]
    async fn lookup_misses_other_operations() {
        let cache = ResponseCache::in_memory().await.unwrap();
        cache
            .store("get_zones", &Value::Null, &json!([]))
            .await
            .unwrap();

        let miss = cache.lookup("get_settings", &Value::Null).await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = ResponseCache::in_memory().await.unwrap();
        cache
            .store_with_ttl(
                "get_health",
                &Value::Null,
                &json!({"status": "ok"}),
                Duration::from_millis(10),
            )
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        let miss = cache.lookup("get_health", &Value::Null).await.unwrap();
        assert!(miss.is_none());

        assert_eq!(cache.purge_expired().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn invalidate_targets_one_operation() {
        let cache = ResponseCache::in_memory().await.unwrap();
        cache.store("a", &Value::Null, &json!(1)).await.unwrap();
        cache.store("b", &Value::Null, &json!(2)).await.unwrap();

        assert_eq!(cache.invalidate("a").await.unwrap(), 1);
        assert!(cache.lookup("a", &Value::Null).await.unwrap().is_none());
        assert!(cache.lookup("b", &Value::Null).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn file_backed_cache_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("responses.sqlite");

        {
            let cache = ResponseCache::new(CacheConfig::at_path(&db)).await.unwrap();
            cache
                .store("get_zones", &Value::Null, &json!([{"id": 1}]))
                .await
                .unwrap();
        }

        let cache = ResponseCache::new(CacheConfig::at_path(&db)).await.unwrap();
        let hit = cache.lookup("get_zones", &Value::Null).await.unwrap();
        assert_eq!(hit, Some(json!([{"id": 1}])));
    }

    #[tokio::test]
    async fn store_replaces_existing_entry() {
        let cache = ResponseCache::in_memory().await.unwrap();
        cache.store("op", &Value::Null, &json!(1)).await.unwrap();
        cache.store("op", &Value::Null, &json!(2)).await.unwrap();

        assert_eq!(cache.entry_count().await.unwrap(), 1);
        assert_eq!(
            cache.lookup("op", &Value::Null).await.unwrap(),
            Some(json!(2))
        );
    }
}
