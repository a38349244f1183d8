//! Startup sequencer.
//!
//! Boot is a single-shot state machine, not a supervisor loop:
//!
//! ```text
//! INIT -> DB_CONNECTING -> DB_READY -> LISTENING -> SEEDING -> READY
//!              |                           |
//!              +--------> FAILED <---------+
//! ```
//!
//! Connector and bind failures are fatal (the process exits non-zero);
//! seeding failures are contained in the report and never block READY.
//! The sequence is generic over its ports so tests can drive every
//! transition without a real database or socket.

use async_trait::async_trait;
use thiserror::Error;

use crate::errors::AppError;
use crate::seed::SeedReport;

pub mod ports;

pub use ports::{PgConnector, TcpBinder};

/// Phases of the boot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Init,
    DbConnecting,
    DbReady,
    Listening,
    Seeding,
    Ready,
    Failed,
}

impl BootPhase {
    /// Transition guard. Encodes the only legal edges; everything else,
    /// including every backward edge, is rejected.
    pub fn can_advance_to(self, next: BootPhase) -> bool {
        use BootPhase::*;
        matches!(
            (self, next),
            (Init, DbConnecting)
                | (DbConnecting, DbReady)
                | (DbConnecting, Failed)
                | (DbReady, Listening)
                | (Listening, Seeding)
                | (Listening, Failed)
                | (Seeding, Ready)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BootPhase::Ready | BootPhase::Failed)
    }
}

impl std::fmt::Display for BootPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BootPhase::Init => "INIT",
            BootPhase::DbConnecting => "DB_CONNECTING",
            BootPhase::DbReady => "DB_READY",
            BootPhase::Listening => "LISTENING",
            BootPhase::Seeding => "SEEDING",
            BootPhase::Ready => "READY",
            BootPhase::Failed => "FAILED",
        };
        write!(f, "{}", name)
    }
}

/// Fatal boot failures. Seeding problems are not among them.
#[derive(Debug, Error)]
pub enum BootError {
    /// The database connector failed; the listener was never bound.
    #[error(transparent)]
    Connect(AppError),
    /// Binding the listener failed after the database was ready.
    #[error(transparent)]
    Bind(AppError),
}

impl From<BootError> for AppError {
    fn from(err: BootError) -> Self {
        match err {
            BootError::Connect(e) | BootError::Bind(e) => e,
        }
    }
}

/// Opens and verifies the store connection.
#[async_trait]
pub trait Connector: Send + Sync {
    type Handle: Send;

    async fn connect(&self) -> Result<Self::Handle, AppError>;
}

/// Binds the network listener.
#[async_trait]
pub trait Binder: Send + Sync {
    type Socket: Send;

    async fn bind(&self) -> Result<Self::Socket, AppError>;
}

/// Runs the seed orchestrator against the connected handle.
#[async_trait]
pub trait Seeder<H: Sync>: Send + Sync {
    async fn seed(&self, handle: &H) -> SeedReport;
}

/// Everything a successful boot hands to the server loop.
pub struct BootOutcome<H, K> {
    pub handle: H,
    pub socket: K,
    pub seed_report: SeedReport,
    /// Every phase entered, in order.
    pub history: Vec<BootPhase>,
}

impl<H, K> std::fmt::Debug for BootOutcome<H, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootOutcome")
            .field("seed_report", &self.seed_report)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

/// Drives one boot run over injected ports.
pub struct BootSequence<C, B, S> {
    connector: C,
    binder: B,
    seeder: S,
    phase: BootPhase,
    history: Vec<BootPhase>,
}

impl<C, B, S> BootSequence<C, B, S>
where
    C: Connector,
    C::Handle: Sync,
    B: Binder,
    S: Seeder<C::Handle>,
{
    pub fn new(connector: C, binder: B, seeder: S) -> Self {
        Self {
            connector,
            binder,
            seeder,
            phase: BootPhase::Init,
            history: vec![BootPhase::Init],
        }
    }

    /// Current phase; terminal after `run` returns.
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Every phase entered so far, in order.
    pub fn history(&self) -> &[BootPhase] {
        &self.history
    }

    fn advance(&mut self, next: BootPhase) {
        assert!(
            self.phase.can_advance_to(next),
            "illegal boot transition {} -> {}",
            self.phase,
            next
        );
        tracing::debug!("Boot phase: {} -> {}", self.phase, next);
        self.phase = next;
        self.history.push(next);
    }

    /// Run the sequence once: connect, bind, seed, ready.
    ///
    /// On failure the sequence lands in `FAILED` and stays inspectable
    /// through `phase()` and `history()`.
    pub async fn run(&mut self) -> Result<BootOutcome<C::Handle, B::Socket>, BootError> {
        assert_eq!(self.phase, BootPhase::Init, "boot sequence is single-shot");

        self.advance(BootPhase::DbConnecting);
        let handle = match self.connector.connect().await {
            Ok(handle) => handle,
            Err(e) => {
                self.advance(BootPhase::Failed);
                return Err(BootError::Connect(e));
            }
        };
        self.advance(BootPhase::DbReady);

        self.advance(BootPhase::Listening);
        let socket = match self.binder.bind().await {
            Ok(socket) => socket,
            Err(e) => {
                self.advance(BootPhase::Failed);
                return Err(BootError::Bind(e));
            }
        };

        // The listener is already accepting (its backlog holds early
        // connections), so requests during this window may observe a
        // partially seeded store.
        self.advance(BootPhase::Seeding);
        let seed_report = self.seeder.seed(&handle).await;

        self.advance(BootPhase::Ready);
        tracing::info!("Server ready");

        Ok(BootOutcome {
            handle,
            socket,
            seed_report,
            history: self.history.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BootPhase::*;

    const ALL: [BootPhase; 7] = [Init, DbConnecting, DbReady, Listening, Seeding, Ready, Failed];

    #[test]
    fn guard_accepts_exactly_the_boot_edges() {
        let legal = [
            (Init, DbConnecting),
            (DbConnecting, DbReady),
            (DbConnecting, Failed),
            (DbReady, Listening),
            (Listening, Seeding),
            (Listening, Failed),
            (Seeding, Ready),
        ];

        for from in ALL {
            for to in ALL {
                let expected = legal.contains(&(from, to));
                assert_eq!(
                    from.can_advance_to(to),
                    expected,
                    "transition {} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn failed_is_reachable_only_from_connecting_and_listening() {
        for from in ALL {
            let expected = matches!(from, DbConnecting | Listening);
            assert_eq!(from.can_advance_to(Failed), expected);
        }
    }

    #[test]
    fn terminal_phases_have_no_outgoing_edges() {
        for terminal in [Ready, Failed] {
            assert!(terminal.is_terminal());
            for to in ALL {
                assert!(!terminal.can_advance_to(to));
            }
        }
    }

    #[test]
    fn phases_use_boot_log_names() {
        assert_eq!(DbConnecting.to_string(), "DB_CONNECTING");
        assert_eq!(Ready.to_string(), "READY");
    }
}
