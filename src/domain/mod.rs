//! Domain layer - Core business entities.
//!
//! Typed payloads for the collections the service reasons about (users,
//! cats). Products, orders, and adoptions stay schemaless and never get a
//! domain type.

pub mod cat;
pub mod user;

pub use cat::{Cat, CatResponse, CatStatus};
pub use user::{User, UserResponse, UserRole};
