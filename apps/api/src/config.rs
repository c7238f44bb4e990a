use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_UPSTREAM_ENDPOINTS: &str = "http://localhost:8080";

/// Application configuration loaded from environment variables.
/// Every variable has a default; the service runs with no backend at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Career backends, tried in this order.
    pub upstream_endpoints: Vec<String>,
    /// Per-endpoint timeout. `None` means no timeout.
    pub endpoint_timeout: Option<Duration>,
    /// Persisted state goes to Redis when set, otherwise stays in memory.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let upstream = std::env::var("UPSTREAM_ENDPOINTS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_ENDPOINTS.to_string());

        let endpoint_timeout = match std::env::var("ENDPOINT_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(Config {
            upstream_endpoints: parse_endpoints(&upstream),
            endpoint_timeout,
            redis_url: std::env::var("REDIS_URL").ok().filter(|u| !u.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Comma-separated list; blank pieces are skipped, order is kept.
fn parse_endpoints(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s > 0.0)
        .with_context(|| format!("ENDPOINT_TIMEOUT_SECS must be a positive number, got '{raw}'"))?;
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("ENDPOINT_TIMEOUT_SECS is out of range, got '{raw}'"))
}
