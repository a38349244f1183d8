//! Seed command - Runs the demo-data seed modules once.
//!
//! Unlike startup seeding, a failed module here fails the command: the
//! operator asked for seeding explicitly and wants a truthful exit code.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::seed::SeedRunner;
use crate::store::PgStore;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let store = PgStore::connect(&config).await?;
    tracing::info!("Database connected");

    let report = SeedRunner::with_default_modules().seed_all(&store).await;

    for entry in report.entries() {
        match &entry.result {
            Ok(outcome) => tracing::info!(
                "{}: {} created, {} already existed",
                entry.entity,
                outcome.created,
                outcome.existing
            ),
            Err(e) => tracing::error!("{}", e),
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(AppError::internal(format!(
            "{} seed module(s) failed",
            report.failures().len()
        )))
    }
}
