//! Axum route handlers for remembered inputs and user settings.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::settings::{PersistedState, UserApiKeys};
use crate::settings::validate_backend_url;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LastSubmissionResponse {
    pub last_career: Option<String>,
    pub last_skills: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub last_update: Option<i64>,
}

/// Settings as shown back to the user. Key values are never echoed.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SettingsView {
    pub youtube_configured: bool,
    pub books_configured: bool,
    pub knowledge_graph_configured: bool,
    pub backend: Option<String>,
}

impl From<Option<&UserApiKeys>> for SettingsView {
    fn from(keys: Option<&UserApiKeys>) -> Self {
        let keys = keys.cloned().unwrap_or_default();
        Self {
            youtube_configured: keys.youtube.is_some(),
            books_configured: keys.books.is_some(),
            knowledge_graph_configured: keys.knowledge_graph.is_some(),
            backend: keys.backend,
        }
    }
}

/// GET /api/v1/state
///
/// Last submitted inputs, used to prefill the form on startup.
pub async fn handle_last_submission(
    State(state): State<AppState>,
) -> Result<Json<LastSubmissionResponse>, AppError> {
    let PersistedState {
        last_career,
        last_skills,
        last_update,
        ..
    } = state.store.load().await?;

    Ok(Json(LastSubmissionResponse {
        last_career,
        last_skills,
        last_update: last_update.map(|t| t.timestamp_millis()),
    }))
}

/// GET /api/v1/settings
pub async fn handle_get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsView>, AppError> {
    let persisted = state.store.load().await?;
    Ok(Json(SettingsView::from(persisted.user_api_keys.as_ref())))
}

/// PUT /api/v1/settings
///
/// Blank values are stored as unset. A backend override must be an absolute http(s) URL.
pub async fn handle_save_settings(
    State(state): State<AppState>,
    Json(keys): Json<UserApiKeys>,
) -> Result<Json<SettingsView>, AppError> {
    let keys = keys.normalized();
    if let Some(backend) = keys.backend.as_deref() {
        validate_backend_url(backend)?;
    }

    state.store.save_api_keys(&keys).await?;
    info!("User settings saved (backend override: {:?})", keys.backend);

    Ok(Json(SettingsView::from(Some(&keys))))
}

/// DELETE /api/v1/settings
pub async fn handle_clear_settings(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.clear_api_keys().await?;
    info!("User settings cleared");
    Ok(StatusCode::NO_CONTENT)
}
