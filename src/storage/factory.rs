//! Backend construction from configuration.

use super::file::FileStore;
use super::memory::MemoryStore;
use super::store::Store;
use crate::config::{BackendType, Config};
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use std::time::Duration;

/// Creates a storage backend based on the provided configuration.
///
/// # Errors
///
/// Returns an error if the configured backend requires parameters that are
/// missing, names a backend that is not implemented yet, or fails its own
/// construction (e.g. the redirects file cannot be read).
pub async fn new_store(config: &Config) -> Result<Arc<dyn Store>> {
    match config.backend_type {
        BackendType::Memory => Ok(Arc::new(MemoryStore::new())),

        BackendType::File => {
            let path = config
                .backend_file_path
                .as_deref()
                .context("file backend requires BACKEND_FILE_PATH")?;
            let interval = Duration::from_secs(config.backend_file_refresh_seconds);
            let store = FileStore::open_with_interval(path, interval)
                .await
                .with_context(|| format!("failed to load redirects from '{path}'"))?;
            Ok(Arc::new(store))
        }

        BackendType::Redis => bail!("redis backend not yet implemented"),
        BackendType::Sqlite => bail!("sqlite backend not yet implemented"),
    }
}
