use std::sync::Arc;

use anyhow::Context;
use todo_api::{
    config::Config, middleware::cors_layer, route::create_router, store::SqliteStore, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Entry point of the application
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.socket_addr().await?;

    let store = SqliteStore::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    tracing::info!(url = %config.database_url, "connected to the database");

    let cors = cors_layer(&config.cors_origin)
        .with_context(|| format!("invalid CORS_ORIGIN {:?}", config.cors_origin))?;
    let app = create_router(Arc::new(AppState::new(store)), cors);

    tracing::info!(%addr, "server started");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
