//! Recommendation handler.
//!
//! A thin filter over the cats collection. There is no matching
//! algorithm behind this endpoint.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::config::COLLECTION_CATS;
use crate::domain::{Cat, CatResponse};
use crate::errors::AppResult;

/// Recommendation filters
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RecommendationParams {
    /// Preferred breed (case-insensitive match)
    pub breed: Option<String>,
    /// Maximum age in years
    pub max_age: Option<u8>,
}

/// Create recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/", get(recommend_cats))
}

/// Recommend available cats matching the filters
#[utoipa::path(
    get,
    path = "/api/recommendations",
    tag = "Recommendations",
    params(RecommendationParams),
    responses(
        (status = 200, description = "Available cats matching the filters", body = Vec<CatResponse>)
    )
)]
pub async fn recommend_cats(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<Vec<CatResponse>>> {
    let docs = state.store.list(COLLECTION_CATS).await?;

    let mut matches = Vec::new();
    for doc in docs {
        let cat: Cat = doc.decode()?;
        if !cat.is_available() {
            continue;
        }
        if let Some(breed) = &params.breed {
            if !cat.breed.eq_ignore_ascii_case(breed) {
                continue;
            }
        }
        if let Some(max_age) = params.max_age {
            if cat.age > max_age {
                continue;
            }
        }
        matches.push(CatResponse::new(doc.id, doc.created_at, cat));
    }

    Ok(Json(matches))
}
