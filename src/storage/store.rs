//! Store trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The short code is not present in the current mapping.
    #[error("short code not found")]
    NotFound,

    /// The backend does not support writes.
    #[error("store is read-only")]
    ReadOnly,

    /// The source file could not be read (missing, unreadable, stat failure).
    #[error("failed to read redirects file: {0}")]
    Io(#[from] std::io::Error),

    /// The source file content is not a valid redirects document.
    #[error("failed to parse redirects file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for resolving short codes to long URLs.
///
/// Implementations must be thread-safe: any number of lookups may run
/// concurrently with each other and with writes, and callers never observe a
/// partially applied update.
///
/// # Implementations
///
/// - [`crate::storage::MemoryStore`] - Mutable in-memory backend
/// - [`crate::storage::FileStore`] - Read-only file-backed backend with periodic reload
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Retrieves the long URL for a given short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the code is absent from the
    /// current mapping.
    async fn get(&self, code: &str) -> StoreResult<String>;

    /// Stores a mapping from short code to long URL, overwriting any
    /// existing entry for the same code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadOnly`] if the backend does not support
    /// writes.
    async fn set(&self, code: &str, long_url: &str) -> StoreResult<()>;

    /// Releases any resources held by the backend (timers, background
    /// tasks).
    ///
    /// Safe to call more than once; calls after the first are no-ops.
    async fn close(&self) -> StoreResult<()>;
}
