//! Storage backends for short code resolution.
//!
//! Provides a [`Store`] trait with two implementations:
//! - [`MemoryStore`] - Mutable in-memory map, useful for tests and ephemeral setups
//! - [`FileStore`] - Read-only map loaded from a YAML file and refreshed in the background
//!
//! Backends are selected at startup via [`new_store`] from the configured
//! [`crate::config::BackendType`].

mod factory;
mod file;
mod memory;
mod store;

pub use factory::new_store;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{Store, StoreError, StoreResult};

#[cfg(test)]
pub use store::MockStore;
