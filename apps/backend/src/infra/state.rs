use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::{AppConfig, StoreKind};
use crate::error::AppError;
use crate::repos::services;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;
use crate::store::seed::seed_from_file;
use crate::store::{MemoryStore, PgStore, SharedStore};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    store_kind: StoreKind,
    services_seed: Option<PathBuf>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            store_kind: StoreKind::Memory,
            services_seed: None,
        }
    }

    /// Security, store and seed settings from a loaded config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_security(
                SecurityConfig::new(config.jwt_secret.as_bytes())
                    .with_runtime_env(config.runtime_env),
            )
            .with_store(config.store.clone())
            .with_services_seed(config.services_seed.clone())
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_store(mut self, store_kind: StoreKind) -> Self {
        self.store_kind = store_kind;
        self
    }

    pub fn with_services_seed(mut self, path: Option<PathBuf>) -> Self {
        self.services_seed = path;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let store: SharedStore = match &self.store_kind {
            StoreKind::Memory => {
                info!("using in-memory document store");
                Arc::new(MemoryStore::new())
            }
            StoreKind::Postgres(db) => {
                info!(host = %db.host, port = db.port, db = %db.name, "connecting to postgres document store");
                Arc::new(PgStore::connect(&db.url(), db.max_connections).await?)
            }
        };

        if let Some(path) = &self.services_seed {
            seed_from_file(store.as_ref(), services::COLLECTION, path).await?;
        }

        Ok(AppState::new(store, self.security_config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::store::Filter;

    #[tokio::test]
    async fn default_build_uses_memory_store() {
        let state = build_state().build().await.unwrap();
        assert!(state.store.ping().await.is_ok());
        assert!(state
            .store
            .find(services::COLLECTION, &Filter::new())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn seed_file_populates_services() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title":"Battery charge","price":"35"}}]"#).unwrap();

        let state = build_state()
            .with_services_seed(Some(file.path().to_path_buf()))
            .build()
            .await
            .unwrap();

        let docs = services::list_services(state.store.as_ref()).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["title"], "Battery charge");
    }

    #[tokio::test]
    async fn bad_seed_fails_build() {
        let result = build_state()
            .with_services_seed(Some(PathBuf::from("/definitely/not/here.json")))
            .build()
            .await;
        assert!(matches!(result, Err(AppError::Store { .. })));
    }
}
