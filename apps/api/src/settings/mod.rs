//! User settings and remembered inputs, behind an injected `StateStore`.

pub mod handlers;
pub mod redis_store;
pub mod store;

use url::Url;

use crate::errors::AppError;

/// Endpoints for one build: the user's backend override first, then the
/// configured endpoints. Duplicates keep their first position.
pub fn endpoint_list(configured: &[String], backend_override: Option<&str>) -> Vec<String> {
    let mut endpoints: Vec<String> = Vec::with_capacity(configured.len() + 1);
    let candidates = backend_override
        .into_iter()
        .chain(configured.iter().map(String::as_str));

    for endpoint in candidates {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() || endpoints.iter().any(|e| e == endpoint) {
            continue;
        }
        endpoints.push(endpoint.to_string());
    }

    endpoints
}

/// A backend override must be an absolute http(s) URL.
pub fn validate_backend_url(candidate: &str) -> Result<(), AppError> {
    match Url::parse(candidate) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(AppError::Validation(format!(
            "backend URL must use http or https, got '{}'",
            url.scheme()
        ))),
        Err(e) => Err(AppError::Validation(format!(
            "backend URL '{candidate}' is invalid: {e}"
        ))),
    }
}
