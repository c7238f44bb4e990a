use std::sync::Arc;

use crate::config::Config;
use crate::playlist::orchestrator::FetchOrchestrator;
use crate::settings::store::StateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the HTTP client and the read-only career tables.
    pub orchestrator: FetchOrchestrator,
    /// Pluggable persistence. Redis when `REDIS_URL` is set, in-memory otherwise.
    pub store: Arc<dyn StateStore>,
}
