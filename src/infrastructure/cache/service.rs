//! Cache service trait and error types.

use async_trait::async_trait;

use crate::domain::entities::Merchant;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching merchant records on the quote hot path.
///
/// The quote endpoint fires on every map drag in the checkout UI, so the
/// merchant lookup backing it is worth caching. Implementations must be
/// fail-open: an unavailable cache degrades to database lookups and never
/// disrupts quote serving.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached merchant record.
    ///
    /// Returns `Ok(None)` on a miss, and also on backend errors
    /// (fail-open: errors are logged and treated as misses).
    async fn get_merchant(&self, id: i64) -> CacheResult<Option<Merchant>>;

    /// Stores a merchant record with an optional TTL override.
    ///
    /// Implementations fall back to their configured default TTL when
    /// `ttl_seconds` is `None`, and swallow backend errors after logging.
    async fn set_merchant(&self, merchant: &Merchant, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes a cached merchant record.
    ///
    /// Called when a merchant is updated or deactivated so stale
    /// coordinates never feed a quote.
    async fn invalidate(&self, id: i64) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
