//! Document persistence.
//!
//! Handlers never talk to a database client directly; they receive a
//! [`SharedStore`] through `AppState` and go through the repositories in
//! `crate::repos`. Two backends implement [`DocumentStore`]:
//!
//! - [`memory::MemoryStore`] keeps collections in a sharded in-process map.
//! - [`postgres::PgStore`] keeps documents as JSONB rows.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod postgres;
pub mod seed;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A stored JSON object.
pub type Document = serde_json::Map<String, Value>;

/// Top-level field equality filter. An empty filter matches everything.
pub type Filter = serde_json::Map<String, Value>;

/// Key under which every stored document carries its identifier.
pub const ID_FIELD: &str = "_id";

pub type SharedStore = Arc<dyn DocumentStore>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("seed file error: {0}")]
    Seed(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Result of a shallow field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// All documents in `collection` matching `filter`, in insertion order.
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Store `doc` under a freshly generated identifier and return it.
    /// Any `_id` already present in `doc` is replaced.
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<String, StoreError>;

    /// Store `doc` under `id`, replacing any document already stored there.
    async fn upsert_with_id(
        &self,
        collection: &str,
        id: &str,
        doc: Document,
    ) -> Result<(), StoreError>;

    /// Overwrite the given top-level fields (`$set` semantics). `_id` is
    /// never touched.
    async fn update_fields_by_id(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Number of documents removed (0 or 1).
    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<u64, StoreError>;

    /// Cheap connectivity check for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// New document identifier: 32 lowercase hex characters.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub(crate) fn matches(doc: &Document, filter: &Filter) -> bool {
    filter
        .iter()
        .all(|(key, expected)| doc.get(key) == Some(expected))
}
