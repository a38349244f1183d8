//! Authentication handlers.
//!
//! Register and login work directly against the users collection. No
//! token scheme lives here: the password is an opaque stored credential
//! and a successful login just returns the account.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::COLLECTION_USERS;
use crate::domain::{User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password123", min_length = 8)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "password123")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<UserResponse>> {
    let existing = state
        .store
        .find_by_field(COLLECTION_USERS, "email", &payload.email)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("Account"));
    }

    let user = User::new(payload.name, payload.email, payload.password);
    let data = serde_json::to_value(&user)
        .map_err(|e| AppError::internal(format!("Failed to encode account: {}", e)))?;
    let doc = state.store.insert(COLLECTION_USERS, data).await?;

    Ok(Created(UserResponse::new(doc.id, doc.created_at, user)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    let doc = state
        .store
        .find_by_field(COLLECTION_USERS, "email", &payload.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let user: User = doc.decode()?;
    if user.password != payload.password {
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(UserResponse::new(doc.id, doc.created_at, user)))
}
