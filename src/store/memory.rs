//! In-memory document store for tests and offline runs.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppResult;

use super::{Document, DocumentStore};

/// Store keeping every collection as an insertion-ordered vector.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Text comparison matching how the JSONB `->>` operator renders scalars.
fn field_matches(data: &Value, field: &str, expected: &str) -> bool {
    match data.get(field) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == expected,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn insert(&self, collection: &str, data: Value) -> AppResult<Document> {
        let doc = Document {
            id: Uuid::new_v4(),
            data,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());

        Ok(doc)
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| field_matches(&d.data, field, value)))
            .cloned())
    }

    async fn list(&self, collection: &str) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn update(&self, collection: &str, id: Uuid, data: Value) -> AppResult<Option<Document>> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id));

        Ok(doc.map(|d| {
            d.data = data;
            d.updated_at = chrono::Utc::now();
            d.clone()
        }))
    }

    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };

        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() < before)
    }
}
