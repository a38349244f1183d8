//! Demo user account seed.

use async_trait::async_trait;

use crate::domain::{User, UserRole};
use crate::store::DocumentStore;

use super::{ensure_account, SeedError, SeedModule, SeedOutcome};

/// Email the demo user seed checks for before inserting.
pub const DEMO_USER_EMAIL: &str = "muhammadilyasamran@gmail.com";

/// Ensures the demo user account exists.
pub struct UserSeed;

fn demo_account() -> User {
    User {
        name: "Muhammad Ilyas Bin Amran".to_string(),
        email: DEMO_USER_EMAIL.to_string(),
        password: "password123".to_string(),
        role: UserRole::User,
    }
}

#[async_trait]
impl SeedModule for UserSeed {
    fn entity(&self) -> &'static str {
        "users"
    }

    async fn ensure_seeded(&self, store: &dyn DocumentStore) -> Result<SeedOutcome, SeedError> {
        ensure_account(store, self.entity(), demo_account()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockDocumentStore;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn lookup_failure_becomes_a_seed_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_by_field()
            .with(eq("users"), eq("email"), eq(DEMO_USER_EMAIL))
            .returning(|_, _, _| Err(crate::errors::AppError::internal("boom")));

        let err = UserSeed
            .ensure_seeded(&store)
            .await
            .expect_err("lookup error must surface");

        assert_eq!(err.entity, "users");
    }
}
