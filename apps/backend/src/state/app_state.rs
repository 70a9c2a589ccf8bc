use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::store::{MemoryStore, SharedStore};

/// Shared resources handed to every handler through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(store: SharedStore, security: SecurityConfig) -> Self {
        Self { store, security }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(security: SecurityConfig) -> Self {
        Self::new(Arc::new(MemoryStore::new()), security)
    }
}
