//! Integration tests for the boot sequencer.
//!
//! Fake ports drive every path without a real database or socket:
//! success walks the full phase history, a connect failure never
//! reaches the binder, and seed failures never block readiness.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use pet_haven::boot::{Binder, BootError, BootPhase, BootSequence, Connector};
use pet_haven::config::COLLECTION_USERS;
use pet_haven::errors::AppError;
use pet_haven::seed::{SeedError, SeedModule, SeedOutcome, SeedRunner};
use pet_haven::store::{DocumentStore, MemoryStore};

// =============================================================================
// Fake Ports
// =============================================================================

/// Connector handing out an in-memory store, or refusing to
struct StoreConnector {
    fail: bool,
}

#[async_trait]
impl Connector for StoreConnector {
    type Handle = Arc<dyn DocumentStore>;

    async fn connect(&self) -> Result<Self::Handle, AppError> {
        if self.fail {
            Err(AppError::connection("connection refused"))
        } else {
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Binder with a flag recording whether it was ever called
struct FakeBinder {
    fail: bool,
    called: Arc<AtomicBool>,
}

impl FakeBinder {
    fn new(fail: bool) -> (Self, Arc<AtomicBool>) {
        let called = Arc::new(AtomicBool::new(false));
        (
            Self {
                fail,
                called: called.clone(),
            },
            called,
        )
    }
}

#[async_trait]
impl Binder for FakeBinder {
    type Socket = ();

    async fn bind(&self) -> Result<Self::Socket, AppError> {
        self.called.store(true, Ordering::SeqCst);
        if self.fail {
            Err(AppError::listen("address already in use"))
        } else {
            Ok(())
        }
    }
}

/// Seed module that always reports a failure
struct FailingSeed;

#[async_trait]
impl SeedModule for FailingSeed {
    fn entity(&self) -> &'static str {
        "broken"
    }

    async fn ensure_seeded(&self, _store: &dyn DocumentStore) -> Result<SeedOutcome, SeedError> {
        Err(SeedError::new(
            "broken",
            AppError::internal("Synthetic seed failure"),
        ))
    }
}

// =============================================================================
// Successful Boot
// =============================================================================

#[tokio::test]
async fn test_successful_boot_walks_every_phase_in_order() {
    let (binder, _) = FakeBinder::new(false);
    let mut boot = BootSequence::new(
        StoreConnector { fail: false },
        binder,
        SeedRunner::with_default_modules(),
    );

    let outcome = boot.run().await.unwrap();

    assert_eq!(boot.phase(), BootPhase::Ready);
    assert_eq!(
        outcome.history,
        vec![
            BootPhase::Init,
            BootPhase::DbConnecting,
            BootPhase::DbReady,
            BootPhase::Listening,
            BootPhase::Seeding,
            BootPhase::Ready,
        ]
    );

    // Demo data landed through the handed-over store handle
    assert!(outcome.seed_report.is_clean());
    let users = outcome.handle.list(COLLECTION_USERS).await.unwrap();
    assert_eq!(users.len(), 2);
}

// =============================================================================
// Fatal Failures
// =============================================================================

#[tokio::test]
async fn test_connect_failure_is_fatal_and_skips_binding() {
    let (binder, bind_called) = FakeBinder::new(false);
    let mut boot = BootSequence::new(StoreConnector { fail: true }, binder, SeedRunner::new(vec![]));

    let err = boot.run().await.unwrap_err();

    assert!(matches!(err, BootError::Connect(_)));
    assert!(!bind_called.load(Ordering::SeqCst));
    assert_eq!(boot.phase(), BootPhase::Failed);
    assert_eq!(
        boot.history().to_vec(),
        vec![BootPhase::Init, BootPhase::DbConnecting, BootPhase::Failed]
    );
}

#[tokio::test]
async fn test_bind_failure_is_fatal_after_db_ready() {
    let (binder, bind_called) = FakeBinder::new(true);
    let mut boot = BootSequence::new(StoreConnector { fail: false }, binder, SeedRunner::new(vec![]));

    let err = boot.run().await.unwrap_err();

    assert!(matches!(err, BootError::Bind(_)));
    assert!(bind_called.load(Ordering::SeqCst));
    assert_eq!(boot.phase(), BootPhase::Failed);
    assert_eq!(
        boot.history().to_vec(),
        vec![
            BootPhase::Init,
            BootPhase::DbConnecting,
            BootPhase::DbReady,
            BootPhase::Listening,
            BootPhase::Failed,
        ]
    );
}

#[tokio::test]
async fn test_boot_errors_convert_to_app_errors() {
    // The CLI layer relies on this conversion for its non-zero exit
    let err = BootError::Connect(AppError::connection("connection refused"));
    let app: AppError = err.into();
    assert!(matches!(app, AppError::Connection(_)));

    let err = BootError::Bind(AppError::listen("address already in use"));
    let app: AppError = err.into();
    assert!(matches!(app, AppError::Listen(_)));
}

// =============================================================================
// Seed Failure Containment
// =============================================================================

#[tokio::test]
async fn test_seed_failures_do_not_block_readiness() {
    let (binder, _) = FakeBinder::new(false);
    let seeder = SeedRunner::new(vec![Box::new(FailingSeed)]);
    let mut boot = BootSequence::new(StoreConnector { fail: false }, binder, seeder);

    let outcome = boot.run().await.unwrap();

    assert_eq!(boot.phase(), BootPhase::Ready);
    assert!(!outcome.seed_report.is_clean());
    assert_eq!(outcome.seed_report.failures().len(), 1);
    assert_eq!(outcome.seed_report.failures()[0].entity, "broken");
}
