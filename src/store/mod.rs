//! Document store - collection-oriented persistence.
//!
//! Records live in named collections as JSON documents. The store enforces
//! no schema; typed layers decode payloads where they need to reason about
//! them. `PgStore` persists documents as JSONB rows, `MemoryStore` backs
//! tests and offline runs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[cfg(test)]
use mockall::automock;

/// A stored record: the envelope (id, timestamps) plus the JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Decode the payload into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| AppError::internal(format!("Malformed document {}: {}", self.id, e)))
    }

    /// Flatten the document into a single JSON object with the envelope
    /// fields merged into the payload.
    pub fn into_value(self) -> Value {
        let mut value = self.data;
        if let Value::Object(map) = &mut value {
            map.insert("id".to_string(), json!(self.id));
            map.insert("created_at".to_string(), json!(self.created_at));
            map.insert("updated_at".to_string(), json!(self.updated_at));
        }
        value
    }
}

/// Collection-oriented document persistence.
///
/// The handle is constructed once at startup and passed by ownership
/// (behind `Arc`) into everything that touches data; there is no global
/// connection state.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Verify the backing store answers queries.
    async fn ping(&self) -> AppResult<()>;

    /// Insert a payload into a collection, assigning id and timestamps.
    async fn insert(&self, collection: &str, data: Value) -> AppResult<Document>;

    /// Fetch a document by id.
    async fn find_by_id(&self, collection: &str, id: Uuid) -> AppResult<Option<Document>>;

    /// Fetch the first document whose payload field equals `value`
    /// (text comparison, as a document database would index it).
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Option<Document>>;

    /// List a collection in insertion order.
    async fn list(&self, collection: &str) -> AppResult<Vec<Document>>;

    /// Replace a document's payload, bumping `updated_at`.
    /// Returns `None` when the id is absent.
    async fn update(&self, collection: &str, id: Uuid, data: Value) -> AppResult<Option<Document>>;

    /// Delete a document. Returns whether a record was removed.
    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool>;
}
