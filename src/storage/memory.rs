//! Mutable in-memory storage backend.

use super::store::{Store, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// An in-memory backend backed by a `HashMap` behind a reader/writer lock.
///
/// Lookups take the lock shared and proceed concurrently; writes take it
/// exclusively. Entries live until the process exits — nothing is persisted.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, code: &str) -> StoreResult<String> {
        let entries = self.entries.read().await;
        entries.get(code).cloned().ok_or(StoreError::NotFound)
    }

    async fn set(&self, code: &str, long_url: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(code.to_owned(), long_url.to_owned());
        Ok(())
    }

    async fn close(&self) -> StoreResult<()> {
        // No external resources held.
        Ok(())
    }
}
