//! Pet Haven - Cat adoption and pet shop backend
//!
//! A document-oriented REST API built on Axum. Pets, products, orders
//! and adoption requests live as JSON documents behind one storage
//! trait, and the process walks an explicit boot state machine before
//! it starts answering requests.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities (users, cats)
//! - **store**: Document storage trait and backends
//! - **seed**: Idempotent demo-data seeding
//! - **boot**: Startup sequencing state machine
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Seed demo data without starting the server
//! cargo run -- seed
//! ```

pub mod api;
pub mod boot;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod seed;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Cat, CatStatus, User, UserRole};
pub use errors::{AppError, AppResult};
pub use store::{Document, DocumentStore, MemoryStore, PgStore};
