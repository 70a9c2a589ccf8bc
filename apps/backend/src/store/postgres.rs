//! PostgreSQL backend: one `documents` table, JSONB bodies keyed by
//! `(collection, id)`.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

use super::{new_document_id, Document, DocumentStore, Filter, StoreError, UpdateOutcome, ID_FIELD};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    collection TEXT NOT NULL,
    id TEXT NOT NULL,
    body JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (collection, id)
)
"#;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect and make sure the `documents` table exists.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        info!("documents table ready");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        // Containment equals field equality for scalar values, which is all
        // the routes filter on.
        let rows = sqlx::query_scalar::<_, Json<Document>>(
            "SELECT body FROM documents \
             WHERE collection = $1 AND body @> $2 \
             ORDER BY created_at, id",
        )
        .bind(collection)
        .bind(Json(Value::Object(filter.clone())))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query_scalar::<_, Json<Document>>(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|Json(doc)| doc))
    }

    async fn insert_one(&self, collection: &str, mut doc: Document) -> Result<String, StoreError> {
        let id = new_document_id();
        doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(&id)
            .bind(Json(Value::Object(doc)))
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn upsert_with_id(
        &self,
        collection: &str,
        id: &str,
        mut doc: Document,
    ) -> Result<(), StoreError> {
        doc.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        sqlx::query(
            "INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3) \
             ON CONFLICT (collection, id) DO UPDATE SET body = EXCLUDED.body",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(Value::Object(doc)))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_fields_by_id(
        &self,
        collection: &str,
        id: &str,
        mut fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        fields.remove(ID_FIELD);

        let modified = sqlx::query_scalar::<_, bool>(
            "WITH old AS ( \
                 SELECT body FROM documents WHERE collection = $1 AND id = $2 FOR UPDATE \
             ) \
             UPDATE documents d SET body = d.body || $3 \
             FROM old \
             WHERE d.collection = $1 AND d.id = $2 \
             RETURNING old.body IS DISTINCT FROM d.body",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(Value::Object(fields)))
        .fetch_optional(&self.pool)
        .await?;

        Ok(match modified {
            None => UpdateOutcome::default(),
            Some(changed) => UpdateOutcome {
                matched: 1,
                modified: u64::from(changed),
            },
        })
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
