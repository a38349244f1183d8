//! Production implementations of the boot ports.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::errors::AppError;
use crate::seed::{SeedReport, SeedRunner};
use crate::store::{DocumentStore, PgStore};

use super::{Binder, Connector, Seeder};

/// Connector producing the PostgreSQL-backed store handle.
pub struct PgConnector {
    config: Config,
}

impl PgConnector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for PgConnector {
    type Handle = Arc<dyn DocumentStore>;

    async fn connect(&self) -> Result<Self::Handle, AppError> {
        let store = PgStore::connect(&self.config).await?;
        store.ping().await?;
        tracing::info!("Database connected");
        Ok(Arc::new(store))
    }
}

/// Binds the TCP listener on the configured address.
///
/// The default host is loopback: public exposure is a reverse proxy's
/// job, not this service's.
pub struct TcpBinder {
    host: String,
    port: u16,
}

impl TcpBinder {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

#[async_trait]
impl Binder for TcpBinder {
    type Socket = TcpListener;

    async fn bind(&self) -> Result<Self::Socket, AppError> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::listen(format!("{}: {}", addr, e)))?;

        tracing::info!("Server running on http://{}", addr);
        Ok(listener)
    }
}

#[async_trait]
impl Seeder<Arc<dyn DocumentStore>> for SeedRunner {
    async fn seed(&self, handle: &Arc<dyn DocumentStore>) -> SeedReport {
        self.seed_all(handle.as_ref()).await
    }
}
