//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{COLLECTION_ADOPTIONS, COLLECTION_ORDERS, COLLECTION_PRODUCTS};

use super::handlers::{
    auth_routes, cat_routes, document_routes, recommendation_routes, serve_upload,
};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/api/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API collections
        .nest("/api/auth", auth_routes())
        .nest("/api/cats", cat_routes())
        .nest("/api/adoptions", document_routes(COLLECTION_ADOPTIONS))
        .nest("/api/recommendations", recommendation_routes())
        .nest("/api/products", document_routes(COLLECTION_PRODUCTS))
        .nest("/api/orders", document_routes(COLLECTION_ORDERS))
        // Uploaded images, content type forced by extension
        .route("/uploads/*path", get(serve_upload))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check response. The frontend polls for this exact shape.
#[derive(Serialize)]
struct HealthResponse {
    message: &'static str,
    status: &'static str,
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Server is running",
        status: "OK",
    })
}
