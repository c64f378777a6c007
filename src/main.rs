use axum::{routing::get, Router};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

mod config;
mod content;
mod cors;
mod db;
mod error;
mod handlers;
mod models;

use crate::config::{Config, CorsOrigins};
use crate::db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rpgclaw_landing_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    // Fails before any port is bound when required variables are missing.
    let config = Config::from_env()?;

    info!("RPGCLAW Landing API v{}", content::API_INFO.version);

    let db = Database::open(&config)?;
    info!(database = db.name(), "Database handle held for the process lifetime");

    let app = build_router(&config.cors_origins);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(cors = ?config.cors_origins, "Listening on http://{}/api", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Release the handle even if the server errored.
    db.close().await;
    served?;

    info!("Shutdown complete");
    Ok(())
}

fn build_router(cors_origins: &CorsOrigins) -> Router {
    Router::new()
        // ── Info ────────────────────────────────────────────────────────────
        .route("/api", get(handlers::content::api_info))
        .route("/api/", get(handlers::content::api_info))

        // ── Content collections ─────────────────────────────────────────────
        .route("/api/features", get(handlers::content::list_features))
        .route(
            "/api/connection-steps",
            get(handlers::content::list_connection_steps),
        )
        .route("/api/game-rules", get(handlers::content::get_game_rules))
        .route("/api/roadmap", get(handlers::content::list_roadmap))
        .route("/api/stats", get(handlers::content::get_stats))

        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors::cors_layer(cors_origins)),
        )
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
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

    info!("Shutdown signal received, draining connections...");
}
