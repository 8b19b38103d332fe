use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::{self, ServerState};

/// Connect to the store named in the config and assemble handler state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let existed = common::env::ensure_parent_dir(&cfg.db.database).await?;
    let db = models::db::connect(&cfg.db).await?;
    info!(database = %cfg.db.database, existed, "database connected");
    Ok(ServerState::new(db)?)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state);

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
