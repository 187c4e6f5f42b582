//! No-op cache used when Redis is not configured.

use async_trait::async_trait;

use super::service::{CacheResult, CacheService};
use crate::domain::entities::Merchant;

/// Cache implementation that caches nothing.
///
/// Every lookup is a miss, so callers always fall through to the
/// database. Reports healthy so the health endpoint does not flag a
/// deliberately disabled cache.
#[derive(Debug, Default)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_merchant(&self, _id: i64) -> CacheResult<Option<Merchant>> {
        Ok(None)
    }

    async fn set_merchant(
        &self,
        _merchant: &Merchant,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _id: i64) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_null_cache_always_misses() {
        let cache = NullCache::new();

        let merchant = Merchant {
            id: 1,
            name: "Warung Bu Sri".to_string(),
            address: None,
            latitude: -7.9666,
            longitude: 112.6326,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        cache.set_merchant(&merchant, None).await.unwrap();
        assert!(cache.get_merchant(1).await.unwrap().is_none());
        assert!(cache.health_check().await);
    }
}
