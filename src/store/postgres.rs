//! PostgreSQL-backed document store.
//!
//! Documents are JSONB rows in a single `documents` table keyed by
//! `(collection, id)`. All queries are built at runtime so the crate
//! compiles without a live database.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::config::{Config, DB_MAX_CONNECTIONS};
use crate::errors::{AppError, AppResult};

use super::{Document, DocumentStore};

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS documents (
    collection TEXT NOT NULL,
    id UUID NOT NULL,
    data JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    PRIMARY KEY (collection, id)
)";

const INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection, created_at)";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open the connection pool, verify it, and bootstrap the schema.
    ///
    /// The whole sequence runs under the configured connect timeout so a
    /// hung database fails startup instead of stalling it.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.db_connect_timeout_secs);

        let connect = PgPoolOptions::new()
            .max_connections(DB_MAX_CONNECTIONS)
            .acquire_timeout(timeout)
            .connect(&config.database_url);

        let pool = tokio::time::timeout(timeout, connect)
            .await
            .map_err(|_| {
                AppError::connection(format!(
                    "timed out after {}s",
                    config.db_connect_timeout_secs
                ))
            })?
            .map_err(|e| AppError::connection(e.to_string()))?;

        let store = Self { pool };
        store.ensure_schema().await?;

        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(SCHEMA_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::connection(format!("schema bootstrap failed: {}", e)))?;
        sqlx::query(INDEX_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::connection(format!("schema bootstrap failed: {}", e)))?;
        Ok(())
    }
}

fn row_to_document(row: &PgRow) -> Document {
    Document {
        id: row.get("id"),
        data: row.get("data"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, collection: &str, data: Value) -> AppResult<Document> {
        let doc = Document {
            id: Uuid::new_v4(),
            data,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        sqlx::query(
            "INSERT INTO documents (collection, id, data, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(collection)
        .bind(doc.id)
        .bind(&doc.data)
        .bind(doc.created_at)
        .bind(doc.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(doc)
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> AppResult<Option<Document>> {
        let row = sqlx::query(
            "SELECT id, data, created_at, updated_at FROM documents
             WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_document))
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Option<Document>> {
        let row = sqlx::query(
            "SELECT id, data, created_at, updated_at FROM documents
             WHERE collection = $1 AND data->>$2 = $3
             ORDER BY created_at LIMIT 1",
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_document))
    }

    async fn list(&self, collection: &str) -> AppResult<Vec<Document>> {
        let rows = sqlx::query(
            "SELECT id, data, created_at, updated_at FROM documents
             WHERE collection = $1 ORDER BY created_at",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_document).collect())
    }

    async fn update(&self, collection: &str, id: Uuid, data: Value) -> AppResult<Option<Document>> {
        let row = sqlx::query(
            "UPDATE documents SET data = $3, updated_at = $4
             WHERE collection = $1 AND id = $2
             RETURNING id, data, created_at, updated_at",
        )
        .bind(collection)
        .bind(id)
        .bind(&data)
        .bind(chrono::Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_document))
    }

    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
