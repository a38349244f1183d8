//! Schemaless collection handlers.
//!
//! Adoptions, products, and orders share one conventional CRUD surface
//! over raw JSON documents; no schema lives in this service for them.
//! The mounted collection name travels as a request extension.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use uuid::Uuid;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{Created, NoContent};

/// Collection a document router is mounted on.
#[derive(Debug, Clone, Copy)]
pub struct Collection(pub &'static str);

/// Create CRUD routes over one collection.
pub fn document_routes(collection: &'static str) -> Router<AppState> {
    Router::new()
        .route("/", get(list_documents).post(create_document))
        .route(
            "/:id",
            get(get_document).put(update_document).delete(delete_document),
        )
        .layer(Extension(Collection(collection)))
}

fn require_object(value: &Value) -> AppResult<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(AppError::validation("Request body must be a JSON object"))
    }
}

pub async fn list_documents(
    State(state): State<AppState>,
    Extension(Collection(collection)): Extension<Collection>,
) -> AppResult<Json<Vec<Value>>> {
    let docs = state.store.list(collection).await?;
    Ok(Json(docs.into_iter().map(|d| d.into_value()).collect()))
}

pub async fn get_document(
    State(state): State<AppState>,
    Extension(Collection(collection)): Extension<Collection>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    let doc = state
        .store
        .find_by_id(collection, id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(doc.into_value()))
}

pub async fn create_document(
    State(state): State<AppState>,
    Extension(Collection(collection)): Extension<Collection>,
    JsonBody(payload): JsonBody<Value>,
) -> AppResult<Created<Value>> {
    require_object(&payload)?;
    let doc = state.store.insert(collection, payload).await?;
    Ok(Created(doc.into_value()))
}

pub async fn update_document(
    State(state): State<AppState>,
    Extension(Collection(collection)): Extension<Collection>,
    Path(id): Path<Uuid>,
    JsonBody(payload): JsonBody<Value>,
) -> AppResult<Json<Value>> {
    require_object(&payload)?;
    let doc = state
        .store
        .update(collection, id, payload)
        .await?
        .ok_or_not_found()?;
    Ok(Json(doc.into_value()))
}

pub async fn delete_document(
    State(state): State<AppState>,
    Extension(Collection(collection)): Extension<Collection>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    let deleted = state.store.delete(collection, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(NoContent)
}
