use serde_json::Value;

use crate::store::{Document, DocumentStore, Filter, StoreError, UpdateOutcome};

pub const COLLECTION: &str = "bookings";

/// Field identifying the booking's owner.
pub const OWNER_FIELD: &str = "email";

pub async fn create_booking(store: &dyn DocumentStore, booking: Document) -> Result<String, StoreError> {
    store.insert_one(COLLECTION, booking).await
}

/// Bookings whose `email` equals `owner`, oldest first.
pub async fn list_bookings_for(
    store: &dyn DocumentStore,
    owner: &str,
) -> Result<Vec<Document>, StoreError> {
    let mut filter = Filter::new();
    filter.insert(OWNER_FIELD.to_string(), Value::String(owner.to_string()));
    store.find(COLLECTION, &filter).await
}

pub async fn find_booking(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<Option<Document>, StoreError> {
    store.find_by_id(COLLECTION, id).await
}

pub async fn update_booking_status(
    store: &dyn DocumentStore,
    id: &str,
    status: &str,
) -> Result<UpdateOutcome, StoreError> {
    let mut fields = Document::new();
    fields.insert("status".to_string(), Value::String(status.to_string()));
    store.update_fields_by_id(COLLECTION, id, fields).await
}

pub async fn delete_booking(store: &dyn DocumentStore, id: &str) -> Result<u64, StoreError> {
    store.delete_by_id(COLLECTION, id).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::MemoryStore;

    fn booking(v: Value) -> Document {
        match v {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn listing_is_scoped_to_owner() {
        let store = MemoryStore::new();
        create_booking(&store, booking(json!({"email": "a@x.com", "service": "oil"})))
            .await
            .unwrap();
        create_booking(&store, booking(json!({"email": "b@x.com", "service": "tyres"})))
            .await
            .unwrap();

        let mine = list_bookings_for(&store, "a@x.com").await.unwrap();

        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0]["service"], "oil");
    }

    #[tokio::test]
    async fn status_update_then_delete() {
        let store = MemoryStore::new();
        let id = create_booking(&store, booking(json!({"email": "a@x.com"})))
            .await
            .unwrap();

        let outcome = update_booking_status(&store, &id, "confirm").await.unwrap();
        assert_eq!(outcome.modified, 1);
        assert_eq!(
            find_booking(&store, &id).await.unwrap().unwrap()["status"],
            "confirm"
        );

        assert_eq!(delete_booking(&store, &id).await.unwrap(), 1);
        assert!(find_booking(&store, &id).await.unwrap().is_none());
    }
}
