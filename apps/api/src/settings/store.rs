//! Storage capability for state remembered between submissions.
//!
//! `AppState` holds an `Arc<dyn StateStore>`: Redis when configured, otherwise
//! process memory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::settings::{PersistedState, UserApiKeys};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load(&self) -> Result<PersistedState, StorageError>;

    /// Remembers the inputs of a completed build (live or fallback).
    async fn record_submission(
        &self,
        career: &str,
        skills: &str,
        at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    async fn save_api_keys(&self, keys: &UserApiKeys) -> Result<(), StorageError>;

    async fn clear_api_keys(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStateStore {
    state: RwLock<PersistedState>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load(&self) -> Result<PersistedState, StorageError> {
        Ok(self.state.read().await.clone())
    }

    async fn record_submission(
        &self,
        career: &str,
        skills: &str,
        at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        state.last_career = Some(career.to_string());
        state.last_skills = Some(skills.to_string());
        state.last_update = Some(at);
        Ok(())
    }

    async fn save_api_keys(&self, keys: &UserApiKeys) -> Result<(), StorageError> {
        self.state.write().await.user_api_keys = Some(keys.clone());
        Ok(())
    }

    async fn clear_api_keys(&self) -> Result<(), StorageError> {
        self.state.write().await.user_api_keys = None;
        Ok(())
    }
}
