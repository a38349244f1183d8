//! HTTP request handlers.

pub mod auth_handler;
pub mod cat_handler;
pub mod document_handler;
pub mod recommendation_handler;
pub mod upload_handler;

pub use auth_handler::auth_routes;
pub use cat_handler::cat_routes;
pub use document_handler::document_routes;
pub use recommendation_handler::recommendation_routes;
pub use upload_handler::serve_upload;
