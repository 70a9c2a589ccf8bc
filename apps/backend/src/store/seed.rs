//! Startup seeding of a collection from a JSON file.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use super::{DocumentStore, StoreError, ID_FIELD};

/// Insert every object of the JSON array at `path` into `collection`.
/// Records carrying a string `_id` keep it, so reseeding replaces them in
/// place. Returns the number of documents written.
pub async fn seed_from_file(
    store: &dyn DocumentStore,
    collection: &str,
    path: &Path,
) -> Result<usize, StoreError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::Seed(format!("{}: {e}", path.display())))?;

    let Value::Array(items) = serde_json::from_str::<Value>(&raw)? else {
        return Err(StoreError::Seed(format!(
            "{}: expected a JSON array",
            path.display()
        )));
    };

    let mut inserted = 0;
    for item in items {
        let Value::Object(doc) = item else {
            return Err(StoreError::Seed(format!(
                "{}: entry {inserted} is not an object",
                path.display()
            )));
        };
        match doc.get(ID_FIELD).and_then(Value::as_str).map(str::to_owned) {
            Some(id) => store.upsert_with_id(collection, &id, doc).await?,
            None => {
                store.insert_one(collection, doc).await?;
            }
        }
        inserted += 1;
    }

    info!(collection, inserted, path = %path.display(), "seeded collection");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::store::{Filter, MemoryStore};

    #[tokio::test]
    async fn seeds_every_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title":"Oil change","price":"20"}},{{"title":"Engine repair"}}]"#)
            .unwrap();

        let store = MemoryStore::new();
        let n = seed_from_file(&store, "services", file.path()).await.unwrap();

        assert_eq!(n, 2);
        let docs = store.find("services", &Filter::new()).await.unwrap();
        assert_eq!(docs[0]["title"], "Oil change");
        assert!(docs[1].contains_key("_id"));
    }

    #[tokio::test]
    async fn keeps_seeded_ids_across_reseeds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"_id":"svc-oil","title":"Oil change"}},{{"_id":"svc-engine","title":"Engine repair"}}]"#
        )
        .unwrap();

        let store = MemoryStore::new();
        seed_from_file(&store, "services", file.path()).await.unwrap();
        seed_from_file(&store, "services", file.path()).await.unwrap();

        let docs = store.find("services", &Filter::new()).await.unwrap();
        assert_eq!(docs.len(), 2);
        let oil = store.find_by_id("services", "svc-oil").await.unwrap().unwrap();
        assert_eq!(oil["title"], "Oil change");
        assert_eq!(oil["_id"], "svc-oil");
    }

    #[tokio::test]
    async fn rejects_non_array_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title":"Oil change"}}"#).unwrap();

        let err = seed_from_file(&MemoryStore::new(), "services", file.path())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }

    #[tokio::test]
    async fn missing_file_is_a_seed_error() {
        let err = seed_from_file(&MemoryStore::new(), "services", Path::new("/nonexistent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }
}
