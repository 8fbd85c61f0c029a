//! Community Match Server - Binary Entry Point

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use community_match::api::{create_router, AppState};
use community_match::config::ServerConfig;
use community_match::search::SynonymRegistry;
use community_match::store::{demo_records, ContentStore, MemoryStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let registry = match &config.synonyms_file {
        Some(path) => SynonymRegistry::from_file(path)?,
        None => SynonymRegistry::builtin(),
    };
    tracing::info!(classes = registry.len(), "synonym registry ready");

    let store = match &config.data_file {
        Some(path) => MemoryStore::load_from_file(path)?,
        None => {
            tracing::info!("no data file configured, using demo data");
            MemoryStore::from_records(demo_records())
        }
    };
    let store: Arc<dyn ContentStore> = Arc::new(store);

    let state = Arc::new(AppState::with_config(store, Arc::new(registry), &config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
