//! Database initialization
//!
//! Content documents live in one table per collection. Each row stores the
//! assembled document as JSON text; there is no unique key on the document
//! id, so ingesting the same upload twice produces duplicate rows.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Collection tables, one per content kind
pub const COLLECTION_TABLES: [&str; 3] = ["images", "audio", "video"];

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_collection_tables(&pool).await?;

    Ok(pool)
}

/// Create every collection table (idempotent)
pub async fn create_collection_tables(pool: &SqlitePool) -> Result<()> {
    for table in COLLECTION_TABLES {
        create_collection_table(pool, table).await?;
    }

    info!(
        "Database tables initialized ({})",
        COLLECTION_TABLES.join(", ")
    );

    Ok(())
}

/// Create one collection table (idempotent)
pub async fn create_collection_table(pool: &SqlitePool, table: &str) -> Result<()> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            guid TEXT PRIMARY KEY,
            doc_id TEXT NOT NULL,
            document TEXT NOT NULL,
            inserted_at TEXT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{table}_doc_id ON {table}(doc_id)"
    ))
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_database_creates_collection_tables() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("nested").join("remarc.db");

        let pool = init_database(&db_path).await.unwrap();
        assert!(db_path.exists());

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["audio", "images", "video"]);
    }

    #[tokio::test]
    async fn test_create_collection_tables_is_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        create_collection_tables(&pool).await.unwrap();
        create_collection_tables(&pool).await.unwrap();
    }
}
