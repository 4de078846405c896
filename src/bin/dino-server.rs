use std::sync::Arc;

use dino_extinction::{http, BattleSchema, InMemoryStore, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let settings = Settings::from_env()?;
    tracing::info!(codec = ?settings.codec, "starting battle server");

    let schema = Arc::new(BattleSchema::new(InMemoryStore::new(), settings.codec));
    http::serve(schema, &settings.bind_addr, shutdown_signal()).await?;

    tracing::info!("battle server stopped");
    Ok(())
}

fn init_logging() {
    // RUST_LOG wins; otherwise default to info.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
