//! Integration tests for the document store backends.
//!
//! One shared contract covers both backends. The in-memory run needs
//! nothing; the PostgreSQL run needs a reachable database and stays
//! ignored by default.

use serde_json::json;
use uuid::Uuid;

use pet_haven::config::Config;
use pet_haven::store::{DocumentStore, MemoryStore, PgStore};

// =============================================================================
// Shared Contract
// =============================================================================

/// CRUD behavior every backend must satisfy.
async fn exercise_store_contract(store: &dyn DocumentStore, collection: &str) {
    // Insert assigns an id and keeps the payload
    let doc = store
        .insert(collection, json!({"name": "Whiskers", "age": 3}))
        .await
        .unwrap();
    assert_eq!(doc.data["name"], "Whiskers");

    // Fetch by id
    let fetched = store.find_by_id(collection, doc.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, doc.id);

    // Field lookups compare the text rendering, numbers included
    assert!(store
        .find_by_field(collection, "name", "Whiskers")
        .await
        .unwrap()
        .is_some());
    assert!(store
        .find_by_field(collection, "age", "3")
        .await
        .unwrap()
        .is_some());
    assert!(store
        .find_by_field(collection, "name", "whiskers")
        .await
        .unwrap()
        .is_none());

    // List preserves insertion order
    let second = store
        .insert(collection, json!({"name": "Luna", "age": 2}))
        .await
        .unwrap();
    let listed = store.list(collection).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, doc.id);
    assert_eq!(listed[1].id, second.id);

    // Update replaces the payload
    let updated = store
        .update(collection, doc.id, json!({"name": "Whiskers", "age": 4}))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, doc.id);
    assert_eq!(updated.data["age"], 4);

    // Unknown ids answer None / false
    assert!(store
        .update(collection, Uuid::new_v4(), json!({}))
        .await
        .unwrap()
        .is_none());
    assert!(!store.delete(collection, Uuid::new_v4()).await.unwrap());

    // Delete removes exactly the addressed document
    assert!(store.delete(collection, doc.id).await.unwrap());
    assert_eq!(store.list(collection).await.unwrap().len(), 1);
}

// =============================================================================
// In-Memory Backend
// =============================================================================

#[tokio::test]
async fn test_memory_store_satisfies_the_contract() {
    let store = MemoryStore::new();
    exercise_store_contract(&store, "contract").await;
}

// =============================================================================
// PostgreSQL Backend
// =============================================================================

// Run with a reachable database:
//   DATABASE_URL=postgres://... cargo test -- --ignored
#[tokio::test]
#[ignore = "Requires PostgreSQL (set DATABASE_URL)"]
async fn test_postgres_store_satisfies_the_contract() {
    let config = Config::from_env();
    let store = PgStore::connect(&config).await.unwrap();

    // Unique collection per run so repeated runs never collide
    let collection = format!("contract_{}", Uuid::new_v4().simple());
    exercise_store_contract(&store, &collection).await;
}
