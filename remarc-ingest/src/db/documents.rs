//! Document store operations
//!
//! Each collection is a table of `(guid, doc_id, document, inserted_at)`.
//! Inserts never upsert, so re-ingesting an upload duplicates rows.

use crate::error::StoreError;
use crate::models::{AssembledDocument, Collection};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Destination for assembled documents
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Insert one document into `collection`
    async fn insert(
        &self,
        collection: Collection,
        document: &AssembledDocument,
    ) -> Result<(), StoreError>;
}

/// SQLite-backed document store
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Wrap a pool whose collection tables already exist
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Count documents in a collection
    pub async fn count(&self, collection: Collection) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", collection.name()))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Load every document in a collection, oldest first
    pub async fn load_documents(
        &self,
        collection: Collection,
    ) -> Result<Vec<AssembledDocument>, StoreError> {
        let rows: Vec<String> = sqlx::query_scalar(&format!(
            "SELECT document FROM {} ORDER BY inserted_at, rowid",
            collection.name()
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|json| serde_json::from_str(json).map_err(StoreError::from))
            .collect()
    }
}

#[async_trait]
impl DocumentSink for SqliteDocumentStore {
    async fn insert(
        &self,
        collection: Collection,
        document: &AssembledDocument,
    ) -> Result<(), StoreError> {
        let json = document.to_json()?;

        // Connection is returned to the pool when `conn` drops, on every path
        let mut conn = self.pool.acquire().await?;

        sqlx::query(&format!(
            "INSERT INTO {} (guid, doc_id, document, inserted_at) VALUES (?, ?, ?, ?)",
            collection.name()
        ))
        .bind(Uuid::new_v4().to_string())
        .bind(&document.id)
        .bind(&json)
        .bind(Utc::now().to_rfc3339())
        .execute(&mut *conn)
        .await?;

        tracing::debug!(collection = %collection, id = %document.id, "Document written");

        Ok(())
    }
}
