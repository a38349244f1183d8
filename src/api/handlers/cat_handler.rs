//! Cat listing handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::COLLECTION_CATS;
use crate::domain::{Cat, CatResponse, CatStatus};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::store::Document;
use crate::types::{Created, NoContent};

/// Cat create/replace request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CatRequest {
    /// Cat name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Whiskers")]
    pub name: String,
    /// Breed name
    #[validate(length(min = 1, message = "Breed is required"))]
    #[schema(example = "British Shorthair")]
    pub breed: String,
    /// Age in years
    #[validate(range(max = 30, message = "Age is out of range"))]
    #[schema(example = 3, maximum = 30)]
    pub age: u8,
    /// Cat gender
    #[schema(example = "male")]
    pub gender: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Image path under the uploads mount
    #[serde(default)]
    #[schema(example = "/uploads/whiskers.png")]
    pub image_url: String,
    /// Adoption status, `available` when omitted
    #[serde(default = "default_status")]
    pub status: CatStatus,
}

fn default_status() -> CatStatus {
    CatStatus::Available
}

impl From<CatRequest> for Cat {
    fn from(req: CatRequest) -> Self {
        Cat {
            name: req.name,
            breed: req.breed,
            age: req.age,
            gender: req.gender,
            description: req.description,
            image_url: req.image_url,
            status: req.status,
        }
    }
}

/// Create cat routes
pub fn cat_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cats).post(create_cat))
        .route("/:id", get(get_cat).put(update_cat).delete(delete_cat))
}

fn to_response(doc: Document) -> AppResult<CatResponse> {
    let cat: Cat = doc.decode()?;
    Ok(CatResponse::new(doc.id, doc.created_at, cat))
}

fn encode(cat: &Cat) -> AppResult<serde_json::Value> {
    serde_json::to_value(cat)
        .map_err(|e| AppError::internal(format!("Failed to encode cat: {}", e)))
}

/// List all cats
#[utoipa::path(
    get,
    path = "/api/cats",
    tag = "Cats",
    responses(
        (status = 200, description = "All cat listings", body = Vec<CatResponse>)
    )
)]
pub async fn list_cats(State(state): State<AppState>) -> AppResult<Json<Vec<CatResponse>>> {
    let docs = state.store.list(COLLECTION_CATS).await?;
    let cats = docs
        .into_iter()
        .map(to_response)
        .collect::<AppResult<Vec<_>>>()?;
    Ok(Json(cats))
}

/// Get one cat by id
#[utoipa::path(
    get,
    path = "/api/cats/{id}",
    tag = "Cats",
    params(("id" = Uuid, Path, description = "Cat ID")),
    responses(
        (status = 200, description = "Cat listing", body = CatResponse),
        (status = 404, description = "Cat not found")
    )
)]
pub async fn get_cat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CatResponse>> {
    let doc = state
        .store
        .find_by_id(COLLECTION_CATS, id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(to_response(doc)?))
}

/// Create a cat listing
#[utoipa::path(
    post,
    path = "/api/cats",
    tag = "Cats",
    request_body = CatRequest,
    responses(
        (status = 201, description = "Cat created", body = CatResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_cat(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CatRequest>,
) -> AppResult<Created<CatResponse>> {
    let cat = Cat::from(payload);
    let doc = state.store.insert(COLLECTION_CATS, encode(&cat)?).await?;
    Ok(Created(CatResponse::new(doc.id, doc.created_at, cat)))
}

/// Replace a cat listing
#[utoipa::path(
    put,
    path = "/api/cats/{id}",
    tag = "Cats",
    params(("id" = Uuid, Path, description = "Cat ID")),
    request_body = CatRequest,
    responses(
        (status = 200, description = "Cat updated", body = CatResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Cat not found")
    )
)]
pub async fn update_cat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CatRequest>,
) -> AppResult<Json<CatResponse>> {
    let cat = Cat::from(payload);
    let doc = state
        .store
        .update(COLLECTION_CATS, id, encode(&cat)?)
        .await?
        .ok_or_not_found()?;
    Ok(Json(CatResponse::new(doc.id, doc.created_at, cat)))
}

/// Delete a cat listing
#[utoipa::path(
    delete,
    path = "/api/cats/{id}",
    tag = "Cats",
    params(("id" = Uuid, Path, description = "Cat ID")),
    responses(
        (status = 204, description = "Cat deleted"),
        (status = 404, description = "Cat not found")
    )
)]
pub async fn delete_cat(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<NoContent> {
    let deleted = state.store.delete(COLLECTION_CATS, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(NoContent)
}
