//! Merchant caching layer.
//!
//! - [`CacheService`] - trait with fail-open semantics
//! - [`RedisCache`] - Redis-backed implementation
//! - [`NullCache`] - no-op fallback when Redis is not configured

pub mod null_cache;
pub mod redis_cache;
pub mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
