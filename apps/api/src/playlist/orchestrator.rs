//! Fetch Orchestrator — ordered endpoint failover with local synthesis as the last resort.
//!
//! Endpoints are tried one at a time, in the order given. Any transport error,
//! timeout, non-2xx status or unparseable body advances to the next endpoint;
//! no endpoint is retried. The first success is normalized and returned as-is.
//! When every endpoint fails (or there are none) the profile is synthesized
//! locally: resolve → mark gaps → synthesize resources → normalize (flat shape).
//! A profile is never a mix of live and synthesized data.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::careers::aliases::AliasTable;
use crate::careers::catalog::SkillCatalog;
use crate::careers::resolver::CareerResolver;
use crate::models::profile::CareerProfile;
use crate::models::query::CareerQuery;
use crate::playlist::gap::mark_gaps;
use crate::playlist::normalizer::normalize;
use crate::playlist::synthesizer::synthesize;

#[derive(Debug, Error)]
enum EndpointError {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unsuccessful status {0}")]
    Status(u16),

    #[error("unreadable body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Where a built profile came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileSource {
    Live { endpoint: String },
    Fallback,
}

#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub profile: CareerProfile,
    pub source: ProfileSource,
}

impl BuildOutcome {
    pub fn was_fallback(&self) -> bool {
        matches!(self.source, ProfileSource::Fallback)
    }

    pub fn endpoint(&self) -> Option<&str> {
        match &self.source {
            ProfileSource::Live { endpoint } => Some(endpoint),
            ProfileSource::Fallback => None,
        }
    }
}

#[derive(Clone)]
pub struct FetchOrchestrator {
    client: Client,
    resolver: CareerResolver,
}

impl FetchOrchestrator {
    /// `timeout` applies per endpoint; `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let resolver = CareerResolver::new(AliasTable::builtin(), SkillCatalog::builtin());
        Ok(Self::with_client(builder.build()?, resolver))
    }

    pub fn with_client(client: Client, resolver: CareerResolver) -> Self {
        Self { client, resolver }
    }

    pub fn resolver(&self) -> &CareerResolver {
        &self.resolver
    }

    /// Builds a profile for `query`. Never fails.
    pub async fn build(&self, query: &CareerQuery, endpoints: &[String]) -> BuildOutcome {
        let body = query.to_backend_request();

        for endpoint in endpoints {
            info!("Requesting career data from {}", endpoint);

            match self.fetch(endpoint, &body).await {
                Ok(raw) => {
                    let mut profile = normalize(&raw);
                    if profile.career_label.is_empty() {
                        profile.career_label = query.career_text().to_string();
                    }
                    info!(
                        "Endpoint {} returned {} skills for '{}'",
                        endpoint,
                        profile.skills.len(),
                        query.career_text()
                    );
                    return BuildOutcome {
                        profile,
                        source: ProfileSource::Live {
                            endpoint: endpoint.clone(),
                        },
                    };
                }
                Err(e) => {
                    warn!("Endpoint {} failed: {}", endpoint, e);
                }
            }
        }

        info!(
            "All {} endpoint(s) failed, synthesizing profile for '{}'",
            endpoints.len(),
            query.career_text()
        );

        BuildOutcome {
            profile: self.build_fallback(query),
            source: ProfileSource::Fallback,
        }
    }

    /// Local-only profile: resolved skills, gap flags and search-link resources.
    pub fn build_fallback(&self, query: &CareerQuery) -> CareerProfile {
        normalize(&self.fallback_payload(query))
    }

    /// The fallback expressed in the flat backend shape.
    fn fallback_payload(&self, query: &CareerQuery) -> Value {
        let skills = self.resolver.resolve(query.career_text());
        let entries = mark_gaps(&skills, query.known_skills_text());

        let mut playlist = Map::new();
        let mut books = Map::new();
        let mut certifications = Map::new();
        for skill in &skills {
            let resources = synthesize(skill);
            playlist.insert(skill.clone(), json!(resources.videos));
            books.insert(skill.clone(), json!(resources.books));
            certifications.insert(skill.clone(), json!(resources.certifications));
        }

        let skill_gap: Vec<&str> = entries
            .iter()
            .filter(|e| e.is_gap)
            .map(|e| e.skill.as_str())
            .collect();

        json!({
            "career": query.career_text(),
            "skills": skills,
            "skill_gap": skill_gap,
            "playlist": playlist,
            "books": books,
            "certifications": certifications,
        })
    }

    async fn fetch<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, EndpointError> {
        let response = self
            .client
            .post(endpoint)
            .json(body)
            .send()
            .await
            .map_err(EndpointError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EndpointError::Status(status.as_u16()));
        }

        response.json::<Value>().await.map_err(EndpointError::Body)
    }
}
