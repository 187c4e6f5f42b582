//! Redis-backed merchant cache.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::Merchant;

/// Redis cache for merchant records, stored as JSON.
///
/// Uses `ConnectionManager` for connection reuse and reconnection. All
/// operations are fail-open: errors are logged but never propagate to the
/// quote path.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_merchant`]
    ///   is called without an override; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {e}")))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "merchant:".to_string(),
        })
    }

    fn build_key(&self, id: i64) -> String {
        format!("{}{}", self.key_prefix, id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_merchant(&self, id: i64) -> CacheResult<Option<Merchant>> {
        let key = self.build_key(id);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<Merchant>(&payload) {
                Ok(merchant) => {
                    debug!("Cache HIT: merchant {id}");
                    Ok(Some(merchant))
                }
                Err(e) => {
                    // A corrupt entry is dropped so it can be rebuilt from the database.
                    warn!("Discarding undecodable cache entry for merchant {id}: {e}");
                    let _ = conn.del::<_, i32>(&key).await;
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: merchant {id}");
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for merchant {id}: {e}");
                Ok(None)
            }
        }
    }

    async fn set_merchant(&self, merchant: &Merchant, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let key = self.build_key(merchant.id);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        let payload = match serde_json::to_string(merchant) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode merchant {} for cache: {e}", merchant.id);
                return Ok(());
            }
        };

        match conn.set_ex::<_, _, ()>(&key, payload, ttl).await {
            Ok(()) => {
                debug!("Cache SET: merchant {} (TTL: {ttl}s)", merchant.id);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for merchant {}: {e}", merchant.id);
                Ok(())
            }
        }
    }

    async fn invalidate(&self, id: i64) -> CacheResult<()> {
        let key = self.build_key(id);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: merchant {id}");
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for merchant {id}: {e}");
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
