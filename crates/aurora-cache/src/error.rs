//! Cache error types.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors that can occur when reading or revalidating the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend storage error (including a poisoned store lock).
    #[error("storage error: {0}")]
    Storage(String),

    /// Failed to serialize or deserialize a cached value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The loader for a cache miss failed.
    #[error("compute failed: {0}")]
    Compute(String),
}

impl CacheError {
    /// Build a compute error from any displayable loader error.
    pub fn compute(err: impl std::fmt::Display) -> Self {
        Self::Compute(err.to_string())
    }
}
