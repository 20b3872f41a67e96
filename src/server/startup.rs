//! Process bootstrapping: logging, store construction and serving.

use axum::Router;
use entity::store::EntityStore;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, data::seed::seed_demo_data, error::Error};

/// Install the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG`, defaulting to `info`. Calling this more than once
/// keeps the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Construct the entity store, seeding the demo data when configured to.
pub fn build_store(config: &Config) -> Result<EntityStore, Error> {
    let store = EntityStore::new();

    if config.seed_demo_data {
        seed_demo_data(&store)?;
    }

    Ok(store)
}

/// Serve `router` on the configured address until Ctrl+C is received.
pub async fn serve(config: &Config, router: Router) -> Result<(), Error> {
    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!(address = %config.bind_address, "Starting server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}
