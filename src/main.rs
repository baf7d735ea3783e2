//! Paralympics Server: historical Paralympic Games data over HTTP.
//!
//! Main entry point that wires all crates together and starts the server.

use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use paralympics_api::{AppState, build_router};
use paralympics_core::config::AppConfig;
use paralympics_core::error::{AppError, ErrorKind};
use paralympics_database::{DatabasePool, Seeder};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration for `PARALYMPICS_ENV` (default `development`).
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PARALYMPICS_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Paralympics server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let database = DatabasePool::connect(&config.database).await?;

    paralympics_database::migration::run_migrations(database.pool()).await?;

    // ── Step 2: Seed reference data ──────────────────────────────
    // A seed failure stops startup before the listener is bound.
    Seeder::new(database.pool().clone(), config.seed.clone())
        .seed()
        .await
        .map_err(AppError::from)?;

    // ── Step 3: HTTP server ──────────────────────────────────────
    let bind_address = config.server.bind_address();
    let state = AppState::new(config, database.pool().clone());
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to bind {bind_address}: {e}"),
            e,
        )
    })?;
    tracing::info!(address = %bind_address, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    tracing::info!("Paralympics server shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
