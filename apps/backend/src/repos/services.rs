use crate::store::{Document, DocumentStore, Filter, StoreError};

pub const COLLECTION: &str = "services";

pub async fn list_services(store: &dyn DocumentStore) -> Result<Vec<Document>, StoreError> {
    store.find(COLLECTION, &Filter::new()).await
}

pub async fn find_service(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<Option<Document>, StoreError> {
    store.find_by_id(COLLECTION, id).await
}
