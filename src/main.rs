use anyhow::Context;
use tracing_subscriber::EnvFilter;

use drama_rec_api::{
    api::{cors_layer, create_router, AppState},
    config::Config,
    Catalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Refuse to start without a usable catalog
    let catalog = Catalog::from_path(&config.catalog_path)
        .with_context(|| format!("failed to load catalog from {}", config.catalog_path))?;

    let state = AppState::new(catalog);
    let app = create_router(state).layer(cors_layer(&config.cors_origins()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
