//! Admin account seed.

use async_trait::async_trait;

use crate::domain::{User, UserRole};
use crate::store::DocumentStore;

use super::{ensure_account, SeedError, SeedModule, SeedOutcome};

/// Email the admin seed checks for before inserting.
pub const ADMIN_EMAIL: &str = "admin@pethaven.local";

/// Ensures the admin account exists.
pub struct AdminSeed;

fn admin_account() -> User {
    User {
        name: "Admin".to_string(),
        email: ADMIN_EMAIL.to_string(),
        password: "admin123".to_string(),
        role: UserRole::Admin,
    }
}

#[async_trait]
impl SeedModule for AdminSeed {
    fn entity(&self) -> &'static str {
        "admin"
    }

    async fn ensure_seeded(&self, store: &dyn DocumentStore) -> Result<SeedOutcome, SeedError> {
        ensure_account(store, self.entity(), admin_account()).await
    }
}
