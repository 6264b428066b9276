//! # Travel Backend Service
//!
//! Entry point: loads configuration, opens the database, seeds the admin
//! account and serves the API.

use anyhow::Context;
use backend::{database, router, AppState, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env().map_err(anyhow::Error::msg)?;
    config.validate().map_err(anyhow::Error::msg)?;

    let pool = database::create_pool(&config)
        .await
        .context("failed to open database")?;

    database::ensure_admin_account(&pool, &config)
        .await
        .context("admin bootstrap failed")?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("[SERVER] 🚀 Listening on {}", addr);

    let app = router::app(AppState { pool, config });
    axum::serve(listener, app).await?;

    Ok(())
}
