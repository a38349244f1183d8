//! Seed orchestrator.
//!
//! Runs the seed modules strictly in order (admin, users, cats, products)
//! and collects one typed outcome per module. Failures end up in the
//! report, never in a panic or an early return: seeding is non-critical
//! and the caller decides whether to escalate.

use crate::store::DocumentStore;

use super::{AdminSeed, CatSeed, ProductSeed, SeedError, SeedModule, SeedOutcome, UserSeed};

/// One module's result, in execution order.
#[derive(Debug)]
pub struct SeedEntry {
    pub entity: &'static str,
    pub result: Result<SeedOutcome, SeedError>,
}

/// Aggregated outcome of one `seed_all` run.
#[derive(Debug, Default)]
pub struct SeedReport {
    entries: Vec<SeedEntry>,
}

impl SeedReport {
    pub fn entries(&self) -> &[SeedEntry] {
        &self.entries
    }

    /// True when every module succeeded.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| e.result.is_ok())
    }

    /// Total records created across modules.
    pub fn created(&self) -> u32 {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().ok())
            .map(|o| o.created)
            .sum()
    }

    /// Total records that already existed.
    pub fn existing(&self) -> u32 {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().ok())
            .map(|o| o.existing)
            .sum()
    }

    pub fn failures(&self) -> Vec<&SeedError> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().err())
            .collect()
    }

    fn push(&mut self, entity: &'static str, result: Result<SeedOutcome, SeedError>) {
        self.entries.push(SeedEntry { entity, result });
    }
}

/// Runs seed modules in a fixed order against one store handle.
pub struct SeedRunner {
    modules: Vec<Box<dyn SeedModule>>,
}

impl SeedRunner {
    pub fn new(modules: Vec<Box<dyn SeedModule>>) -> Self {
        Self { modules }
    }

    /// The production module set. Order matters: accounts are expected to
    /// exist before dependent demo data (a convention, not an enforced
    /// foreign key).
    pub fn with_default_modules() -> Self {
        Self::new(vec![
            Box::new(AdminSeed),
            Box::new(UserSeed),
            Box::new(CatSeed),
            Box::new(ProductSeed),
        ])
    }

    /// Run every module sequentially, never failing the caller.
    ///
    /// Modules are awaited one at a time so insertion order stays
    /// deterministic.
    pub async fn seed_all(&self, store: &dyn DocumentStore) -> SeedReport {
        tracing::info!("Seeding database...");
        let mut report = SeedReport::default();

        for module in &self.modules {
            let entity = module.entity();
            let result = module.ensure_seeded(store).await;

            if let Err(e) = &result {
                tracing::warn!("Seed module {} failed: {}", entity, e.source);
            }

            report.push(entity, result);
        }

        if report.is_clean() {
            tracing::info!(
                "Seeding complete: {} created, {} already existed",
                report.created(),
                report.existing()
            );
        } else {
            tracing::warn!(
                "Seeding finished with {} failure(s) (non-critical)",
                report.failures().len()
            );
        }

        report
    }
}

impl Default for SeedRunner {
    fn default() -> Self {
        Self::with_default_modules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_modules_run_accounts_before_data() {
        let runner = SeedRunner::with_default_modules();
        let order: Vec<_> = runner.modules.iter().map(|m| m.entity()).collect();
        assert_eq!(order, vec!["admin", "users", "cats", "products"]);
    }
}
