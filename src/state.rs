use std::sync::Arc;

use crate::config::BackendType;
use crate::storage::Store;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub backend_type: BackendType,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, backend_type: BackendType) -> Self {
        Self {
            store,
            backend_type,
        }
    }
}
