//! Landing server entry point.
//!
//! Loads configuration, builds the document store and shared state, then
//! starts the Axum HTTP server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use saathi_store::{DocumentStore, MemoryStore};

use saathi_server::config::{ServerConfig, StoreBackendType};
use saathi_server::routes;
use saathi_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("invalid configuration")?;

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(store = ?config.store, "SugarSaathi landing starting");

    let store = build_store(&config)?;
    let state = Arc::new(AppState::new(store));

    if !config.assets_dir.is_dir() {
        tracing::warn!(
            path = %config.assets_dir.display(),
            "assets directory not found, images will 404"
        );
    }

    let app = routes::build_router(state, &config.assets_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "landing server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("landing server stopped");
    Ok(())
}

/// Build the configured document store.
fn build_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match &config.store {
        StoreBackendType::Memory => {
            info!("using in-memory store (waitlist entries will not persist)");
            Arc::new(MemoryStore::new())
        }
        #[cfg(feature = "firestore-backend")]
        StoreBackendType::Firestore(settings) => {
            info!(project = %settings.project_id, database = %settings.database, "using Firestore store");
            let fs_config = saathi_store::FirestoreConfig {
                base_url: settings.base_url.clone(),
                project_id: settings.project_id.clone(),
                database: settings.database.clone(),
                api_key: settings.api_key.clone(),
                access_token: settings.access_token.clone(),
                timeout: settings.timeout,
            };
            Arc::new(
                saathi_store::FirestoreStore::new(fs_config)
                    .context("failed to set up Firestore store")?,
            )
        }
        #[cfg(not(feature = "firestore-backend"))]
        StoreBackendType::Firestore(_) => {
            anyhow::bail!("Firestore store requested but feature 'firestore-backend' is not enabled");
        }
    };
    Ok(store)
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
