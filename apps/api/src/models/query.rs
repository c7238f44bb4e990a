use serde::Serialize;

use crate::errors::AppError;

/// Raw user input for a single playlist build. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerQuery {
    career_text: String,
    known_skills_text: String,
}

impl CareerQuery {
    /// Validates the career text up front: a blank career is never resolved.
    pub fn new(
        career_text: impl Into<String>,
        known_skills_text: impl Into<String>,
    ) -> Result<Self, AppError> {
        let career_text = career_text.into().trim().to_string();
        if career_text.is_empty() {
            return Err(AppError::Validation("career cannot be empty".to_string()));
        }

        Ok(Self {
            career_text,
            known_skills_text: known_skills_text.into().trim().to_string(),
        })
    }

    pub fn career_text(&self) -> &str {
        &self.career_text
    }

    pub fn known_skills_text(&self) -> &str {
        &self.known_skills_text
    }

    /// Comma-split, trimmed, non-empty pieces of the known-skills text, original casing kept.
    pub fn known_skills(&self) -> Vec<String> {
        split_known_skills(&self.known_skills_text)
    }

    /// JSON body sent to every backend endpoint.
    pub fn to_backend_request(&self) -> BackendRequest {
        BackendRequest {
            career: self.career_text.clone(),
            known_skills: self.known_skills(),
        }
    }
}

/// Wire contract of the career backend: `{career, known_skills}`.
#[derive(Debug, Clone, Serialize)]
pub struct BackendRequest {
    pub career: String,
    pub known_skills: Vec<String>,
}

pub fn split_known_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
