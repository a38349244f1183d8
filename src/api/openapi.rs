//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing. The schemaless
//! document endpoints (adoptions, products, orders) are intentionally
//! undocumented here: they accept and return arbitrary JSON objects.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, cat_handler, recommendation_handler};
use crate::domain::{CatResponse, CatStatus, UserResponse, UserRole};

/// OpenAPI documentation for the Pet Haven backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Haven API",
        version = "0.1.0",
        description = "REST backend for the Pet Haven adoption and shop site"
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Cat endpoints
        cat_handler::list_cats,
        cat_handler::get_cat,
        cat_handler::create_cat,
        cat_handler::update_cat,
        cat_handler::delete_cat,
        // Recommendations
        recommendation_handler::recommend_cats,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            CatStatus,
            CatResponse,
            // Request types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            cat_handler::CatRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "Account registration and login"),
        (name = "Cats", description = "Cat listing management"),
        (name = "Recommendations", description = "Available cats matching simple filters")
    )
)]
pub struct ApiDoc;
