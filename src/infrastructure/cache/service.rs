//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching serialized GraphQL responses.
///
/// Implementations must be thread-safe and fail open: a broken cache degrades
/// to a network request, never to a failed page render.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached payload for `key`.
    ///
    /// `Ok(None)` on a miss. Production implementations also report backend
    /// errors as a miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `payload` under `key`.
    ///
    /// `ttl_seconds = None` applies the implementation's default TTL.
    async fn set(&self, key: &str, payload: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes a cached entry. Returns whether something was deleted.
    async fn invalidate(&self, key: &str) -> CacheResult<bool>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
