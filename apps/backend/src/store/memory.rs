use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use super::{
    matches, new_document_id, Document, DocumentStore, Filter, StoreError, UpdateOutcome, ID_FIELD,
};

/// In-process document store. Each collection is a `Vec` behind one
/// `DashMap` shard entry, so writers to different collections never contend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn id_of(doc: &Document) -> Option<&str> {
        doc.get(ID_FIELD).and_then(Value::as_str)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|doc| Self::id_of(doc) == Some(id))
                .cloned()
        }))
    }

    async fn insert_one(&self, collection: &str, mut doc: Document) -> Result<String, StoreError> {
        let id = new_document_id();
        doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        Ok(id)
    }

    async fn upsert_with_id(
        &self,
        collection: &str,
        id: &str,
        mut doc: Document,
    ) -> Result<(), StoreError> {
        doc.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        match docs.iter().position(|existing| Self::id_of(existing) == Some(id)) {
            Some(idx) => docs[idx] = doc,
            None => docs.push(doc),
        }
        Ok(())
    }

    async fn update_fields_by_id(
        &self,
        collection: &str,
        id: &str,
        mut fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        fields.remove(ID_FIELD);

        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(UpdateOutcome::default());
        };
        let Some(doc) = docs.iter_mut().find(|doc| Self::id_of(doc) == Some(id)) else {
            return Ok(UpdateOutcome::default());
        };

        let mut modified = false;
        for (key, value) in fields {
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<u64, StoreError> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|doc| Self::id_of(doc) != Some(id));
        Ok((before - docs.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
