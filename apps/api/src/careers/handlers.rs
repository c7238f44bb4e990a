//! Axum route handlers for career lookup.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::careers::suggestions::suggest;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub available_careers: Vec<&'static str>,
    pub career_aliases: BTreeMap<&'static str, &'static str>,
    pub total_careers: usize,
}

/// GET /api/v1/careers
///
/// Lists every catalog career (sorted) and the alias table.
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<CareerListResponse> {
    let resolver = state.orchestrator.resolver();

    let mut available_careers: Vec<&'static str> = resolver.catalog().keys().collect();
    available_careers.sort_unstable();

    Json(CareerListResponse {
        total_careers: resolver.catalog().len(),
        available_careers,
        career_aliases: resolver.aliases().iter().collect(),
    })
}

/// GET /api/v1/careers/suggestions?q=
pub async fn handle_suggestions(Query(params): Query<SuggestionQuery>) -> Json<SuggestionResponse> {
    Json(SuggestionResponse {
        suggestions: suggest(&params.q),
    })
}
