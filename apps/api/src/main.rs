mod careers;
mod config;
mod errors;
mod models;
mod playlist;
mod routes;
mod settings;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::playlist::orchestrator::FetchOrchestrator;
use crate::routes::build_router;
use crate::settings::redis_store::RedisStateStore;
use crate::settings::store::{MemoryStateStore, StateStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Playlist API v{}", env!("CARGO_PKG_VERSION"));

    if config.upstream_endpoints.is_empty() {
        info!("No upstream endpoints configured, every build runs offline");
    } else {
        info!("Upstream endpoints: {}", config.upstream_endpoints.join(", "));
    }

    let orchestrator = FetchOrchestrator::new(config.endpoint_timeout)?;
    match config.endpoint_timeout {
        Some(timeout) => info!("Per-endpoint timeout: {:?}", timeout),
        None => info!("No per-endpoint timeout"),
    }

    let store = build_store(&config)?;

    let state = AppState {
        config: config.clone(),
        orchestrator,
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis-backed persistence when `REDIS_URL` is set, in-memory otherwise.
fn build_store(config: &Config) -> Result<Arc<dyn StateStore>> {
    match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Persisted state stored in Redis");
            Ok(Arc::new(RedisStateStore::new(client)))
        }
        None => {
            info!("REDIS_URL not set, persisted state kept in memory");
            Ok(Arc::new(MemoryStateStore::new()))
        }
    }
}
