//! Idempotent startup seeding.
//!
//! Each module guarantees one demo record (or record set) exists in its
//! collection, checking by a natural key before inserting so repeated runs
//! never duplicate. `SeedRunner` executes the modules in a fixed order and
//! aggregates typed per-module outcomes; failures are contained there and
//! classified as non-critical.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::store::DocumentStore;

pub mod admin;
pub mod cats;
pub mod products;
pub mod runner;
pub mod users;

pub use admin::AdminSeed;
pub use cats::CatSeed;
pub use products::ProductSeed;
pub use runner::{SeedEntry, SeedReport, SeedRunner};
pub use users::UserSeed;

/// Counters for one module run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedOutcome {
    pub created: u32,
    pub existing: u32,
}

impl SeedOutcome {
    fn note_created(&mut self) {
        self.created += 1;
    }

    fn note_existing(&mut self) {
        self.existing += 1;
    }
}

/// Seed failure carrying the entity it came from.
#[derive(Debug, Error)]
#[error("Seeding {entity} failed: {source}")]
pub struct SeedError {
    pub entity: &'static str,
    #[source]
    pub source: AppError,
}

impl SeedError {
    pub fn new(entity: &'static str, source: AppError) -> Self {
        Self { entity, source }
    }
}

/// A unit that ensures specific demo records exist without duplicating
/// them across runs.
///
/// The check-then-insert sequence is not atomic against concurrent
/// seeding; one runner invocation per process lifetime is assumed.
#[async_trait]
pub trait SeedModule: Send + Sync {
    /// Entity name used in logs and seed errors.
    fn entity(&self) -> &'static str;

    /// Make sure the module's records exist, inserting any that are absent.
    async fn ensure_seeded(&self, store: &dyn DocumentStore) -> Result<SeedOutcome, SeedError>;
}

/// Check-then-insert one account by email into the users collection.
async fn ensure_account(
    store: &dyn DocumentStore,
    entity: &'static str,
    account: User,
) -> Result<SeedOutcome, SeedError> {
    let mut outcome = SeedOutcome::default();
    upsert_account(store, &mut outcome, &account)
        .await
        .map_err(|e| SeedError::new(entity, e))?;

    if outcome.created > 0 {
        tracing::info!("{} account created: {}", entity, account.email);
    } else {
        tracing::debug!("{} account already exists: {}", entity, account.email);
    }

    Ok(outcome)
}

async fn upsert_account(
    store: &dyn DocumentStore,
    outcome: &mut SeedOutcome,
    account: &User,
) -> AppResult<()> {
    use crate::config::COLLECTION_USERS;

    let found = store
        .find_by_field(COLLECTION_USERS, "email", &account.email)
        .await?;

    if found.is_some() {
        outcome.note_existing();
        return Ok(());
    }

    let data = serde_json::to_value(account)
        .map_err(|e| AppError::internal(format!("Failed to encode account: {}", e)))?;
    store.insert(COLLECTION_USERS, data).await?;
    outcome.note_created();
    Ok(())
}
