use anyhow::{bail, Context};
use tokio::signal;

use trip_planner_api::{
    app,
    config::AppConfig,
    database::{ensure_schema, DatabaseManager},
    logging, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    logging::init_tracing(logging::DEFAULT_FILTER);

    let config = AppConfig::from_env();
    tracing::info!("Starting Trip Planner API in {:?} mode", config.environment);

    if config.security.require_auth && config.security.jwt_secret.is_empty() {
        bail!("JWT_SECRET must be set when authentication is required");
    }

    let db = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;
    ensure_schema(db.pool()).await.context("failed to prepare the schema")?;

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Trip Planner API listening on http://{}", bind_addr);

    let state = AppState::new(db.clone(), config);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
