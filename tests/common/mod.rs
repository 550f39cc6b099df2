#![allow(dead_code)]

use redirector::config::BackendType;
use redirector::state::AppState;
use redirector::storage::{MemoryStore, Store};
use std::path::PathBuf;
use std::sync::Arc;
use tempdir::TempDir;

/// Builds an `AppState` backed by an empty in-memory store.
pub fn memory_state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()), BackendType::Memory)
}

/// Builds an `AppState` backed by an in-memory store pre-filled with entries.
pub async fn seeded_memory_state(entries: &[(&str, &str)]) -> AppState {
    let store = MemoryStore::new();
    for (short, long) in entries {
        store.set(short, long).await.unwrap();
    }
    AppState::new(Arc::new(store), BackendType::Memory)
}

/// Writes a redirects file into `dir` and returns its path.
pub fn write_redirects_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("redirects.yaml");
    std::fs::write(&path, contents).unwrap();
    path
}

/// A minimal valid redirects document with a single entry.
pub fn single_entry_document(short: &str, long: &str) -> String {
    format!("redirects:\n  - short: \"{short}\"\n    long: \"{long}\"\n")
}
