//! Read-only storage backend sourced from a YAML redirects file.
//!
//! The file is loaded once at construction and then re-checked on a fixed
//! interval by a background task. A reload builds a complete replacement
//! mapping off to the side and swaps it in under the write lock, so
//! concurrent lookups observe either the fully-old or fully-new snapshot.

use super::store::{Store, StoreError, StoreResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::{Mutex, RwLock, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// How often the background task checks the source file for changes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// A single redirect mapping in the source file.
#[derive(Debug, Deserialize)]
struct RedirectEntry {
    short: String,
    long: String,
}

/// Top-level structure of the redirects file. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct RedirectsFile {
    #[serde(default)]
    redirects: Vec<RedirectEntry>,
}

/// Point-in-time view of the source file: the mapping plus the file's
/// modification timestamp as observed just before it was read.
struct Snapshot {
    entries: HashMap<String, String>,
    modified: SystemTime,
}

struct RefreshTask {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// File-backed, read-only backend with periodic background reload.
pub struct FileStore {
    snapshot: Arc<RwLock<Snapshot>>,
    refresh: Mutex<Option<RefreshTask>>,
}

impl FileStore {
    /// Opens a file store with the default refresh interval.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed. On failure no background
    /// task is started.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_with_interval(path, DEFAULT_REFRESH_INTERVAL).await
    }

    /// Opens a file store that re-checks the source file every `interval`.
    ///
    /// Performs the initial load synchronously; the store is fully populated
    /// when this returns. Exactly one background refresh task is spawned.
    pub async fn open_with_interval(
        path: impl Into<PathBuf>,
        interval: Duration,
    ) -> StoreResult<Self> {
        let path = path.into();

        // Initial load; a failure here aborts construction.
        let snapshot = Arc::new(RwLock::new(load_snapshot(&path).await?));

        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = tokio::spawn(refresh_loop(
            path,
            Arc::clone(&snapshot),
            interval,
            stop_rx,
        ));

        Ok(Self {
            snapshot,
            refresh: Mutex::new(Some(RefreshTask {
                stop: stop_tx,
                handle,
            })),
        })
    }
}

#[async_trait]
impl Store for FileStore {
    async fn get(&self, code: &str) -> StoreResult<String> {
        let snapshot = self.snapshot.read().await;
        snapshot.entries.get(code).cloned().ok_or(StoreError::NotFound)
    }

    async fn set(&self, _code: &str, _long_url: &str) -> StoreResult<()> {
        Err(StoreError::ReadOnly)
    }

    async fn close(&self) -> StoreResult<()> {
        let task = self.refresh.lock().await.take();
        if let Some(RefreshTask { stop, handle }) = task {
            // A reload already mid-flight may still finish; awaiting the
            // handle guarantees no new reload starts after we return.
            let _ = stop.send(());
            let _ = handle.await;
        }
        Ok(())
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        // Best-effort cleanup for stores dropped without close().
        if let Ok(mut slot) = self.refresh.try_lock()
            && let Some(task) = slot.take()
        {
            task.handle.abort();
        }
    }
}

/// Background worker: waits for either the next tick or the stop signal.
async fn refresh_loop(
    path: PathBuf,
    snapshot: Arc<RwLock<Snapshot>>,
    interval: Duration,
    mut stop: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately and the initial load already ran.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = &mut stop => return,
            _ = ticker.tick() => {
                if let Err(e) = refresh(&path, &snapshot).await {
                    warn!(
                        error = %e,
                        path = %path.display(),
                        "failed to reload redirects, keeping previous snapshot"
                    );
                }
            }
        }
    }
}

/// Re-checks the source file and swaps in a new snapshot if it changed.
///
/// File I/O and parsing happen before the write lock is taken; the lock is
/// held only for the pointer swap.
async fn refresh(path: &Path, snapshot: &RwLock<Snapshot>) -> StoreResult<()> {
    let modified = tokio::fs::metadata(path).await?.modified()?;

    {
        let current = snapshot.read().await;
        if modified <= current.modified {
            return Ok(());
        }
    }

    let fresh = read_snapshot(path, modified).await?;
    let count = fresh.entries.len();

    *snapshot.write().await = fresh;

    info!(path = %path.display(), count, "reloaded redirects from file");
    Ok(())
}

async fn load_snapshot(path: &Path) -> StoreResult<Snapshot> {
    let modified = tokio::fs::metadata(path).await?.modified()?;
    read_snapshot(path, modified).await
}

async fn read_snapshot(path: &Path, modified: SystemTime) -> StoreResult<Snapshot> {
    let contents = tokio::fs::read_to_string(path).await?;
    let entries = parse_document(&contents)?;
    Ok(Snapshot { entries, modified })
}

/// Parses the redirects document into a mapping.
///
/// Duplicate short codes keep the last entry in document order. An empty
/// document yields an empty mapping.
fn parse_document(contents: &str) -> Result<HashMap<String, String>, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let document: RedirectsFile = serde_yaml::from_str(contents)?;
    Ok(document
        .redirects
        .into_iter()
        .map(|entry| (entry.short, entry.long))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_document() {
        let entries = parse_document(
            "redirects:\n  - short: \"abc123\"\n    long: \"https://example.com/page\"\n",
        )
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries["abc123"], "https://example.com/page");
    }

    #[test]
    fn parse_empty_document_yields_empty_mapping() {
        assert!(parse_document("").unwrap().is_empty());
        assert!(parse_document("   \n").unwrap().is_empty());
    }

    #[test]
    fn parse_missing_list_yields_empty_mapping() {
        assert!(parse_document("other: 1\n").unwrap().is_empty());
    }

    #[test]
    fn parse_ignores_unknown_top_level_fields() {
        let entries = parse_document(
            "version: 2\nredirects:\n  - short: a\n    long: \"http://x\"\n",
        )
        .unwrap();
        assert_eq!(entries["a"], "http://x");
    }

    #[test]
    fn parse_duplicate_short_codes_last_entry_wins() {
        let entries = parse_document(
            "redirects:\n  - short: a\n    long: \"http://first\"\n  - short: a\n    long: \"http://second\"\n",
        )
        .unwrap();
        assert_eq!(entries["a"], "http://second");
    }

    #[test]
    fn parse_malformed_document_fails() {
        assert!(parse_document("redirects: [not a mapping]").is_err());
    }
}
