//! Axum route handlers for the Playlist API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::profile::{CareerProfile, ProfileStats};
use crate::models::query::CareerQuery;
use crate::settings::endpoint_list;
use crate::state::AppState;

pub const OFFLINE_NOTICE: &str = "Running in offline mode - showing search links";

/// Known skills arrive either as the raw comma-separated text or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KnownSkillsInput {
    Text(String),
    List(Vec<String>),
}

impl Default for KnownSkillsInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl KnownSkillsInput {
    /// Folds into the comma-separated form that is persisted and re-split downstream.
    /// A comma inside a list item would split it apart, so it becomes a space first:
    /// every list item stays exactly one known-skill token.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::List(items) => items
                .iter()
                .map(|item| item.replace(',', " ").split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildPlaylistRequest {
    pub career: String,
    #[serde(default)]
    pub known_skills: KnownSkillsInput,
}

#[derive(Debug, Serialize)]
pub struct BuildPlaylistResponse {
    pub profile: CareerProfile,
    pub stats: ProfileStats,
    pub was_fallback: bool,
    /// Endpoint that served the data; absent for fallback profiles.
    pub source: Option<String>,
    pub notice: Option<&'static str>,
}

/// POST /api/v1/playlist
///
/// Validates the query, runs endpoint failover (or local synthesis) and
/// remembers the submission for prefilling the next session.
pub async fn handle_build_playlist(
    State(state): State<AppState>,
    Json(request): Json<BuildPlaylistRequest>,
) -> Result<Json<BuildPlaylistResponse>, AppError> {
    let query = CareerQuery::new(request.career, request.known_skills.into_text())?;

    let persisted = state.store.load().await.unwrap_or_else(|e| {
        warn!("Could not load persisted state, using defaults: {e}");
        Default::default()
    });
    let endpoints = endpoint_list(
        &state.config.upstream_endpoints,
        persisted.backend_override(),
    );

    let outcome = state.orchestrator.build(&query, &endpoints).await;

    if let Err(e) = state
        .store
        .record_submission(query.career_text(), query.known_skills_text(), Utc::now())
        .await
    {
        warn!("Failed to record submission: {e}");
    }

    let was_fallback = outcome.was_fallback();
    let source = outcome.endpoint().map(str::to_string);
    let profile = outcome.profile;

    Ok(Json(BuildPlaylistResponse {
        stats: profile.stats(),
        profile,
        was_fallback,
        source,
        notice: was_fallback.then_some(OFFLINE_NOTICE),
    }))
}
