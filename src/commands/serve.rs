//! Serve command - Runs the boot sequence, then the HTTP server.

use crate::api::{create_router, AppState};
use crate::boot::{BootSequence, PgConnector, TcpBinder};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::seed::SeedRunner;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server (env: {})", config.app_env);

    let uploads_dir = config.uploads_dir.clone();

    // Walk the boot phases: connect, bind, seed. Connect and bind
    // failures abort startup; seed failures are reported and tolerated.
    let connector = PgConnector::new(config);
    let binder = TcpBinder::new(args.host, args.port);
    let seeder = SeedRunner::with_default_modules();

    let mut boot = BootSequence::new(connector, binder, seeder);
    let outcome = boot.run().await?;

    let state = AppState::new(outcome.handle, uploads_dir);
    let app = create_router(state);

    axum::serve(outcome.socket, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
