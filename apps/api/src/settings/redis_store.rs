use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use tracing::debug;

use crate::models::settings::{PersistedState, UserApiKeys};
use crate::settings::store::{StateStore, StorageError};

const KEY_PREFIX: &str = "career_playlist";

/// Persisted state in Redis, one key per field. API keys are stored as JSON.
#[derive(Clone)]
pub struct RedisStateStore {
    client: redis::Client,
}

impl RedisStateStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    fn key(field: &str) -> String {
        format!("{KEY_PREFIX}:{field}")
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StorageError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl StateStore for RedisStateStore {
    async fn load(&self) -> Result<PersistedState, StorageError> {
        let mut con = self.connection().await?;

        let last_career: Option<String> = con.get(Self::key("lastCareer")).await?;
        let last_skills: Option<String> = con.get(Self::key("lastSkills")).await?;
        let last_update: Option<i64> = con.get(Self::key("lastUpdate")).await?;
        let api_keys: Option<String> = con.get(Self::key("userApiKeys")).await?;

        let user_api_keys = api_keys
            .map(|raw| serde_json::from_str::<UserApiKeys>(&raw))
            .transpose()?;

        Ok(PersistedState {
            last_career,
            last_skills,
            last_update: last_update.and_then(DateTime::from_timestamp_millis),
            user_api_keys,
        })
    }

    async fn record_submission(
        &self,
        career: &str,
        skills: &str,
        at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut con = self.connection().await?;

        redis::pipe()
            .atomic()
            .set(Self::key("lastCareer"), career)
            .set(Self::key("lastSkills"), skills)
            .set(Self::key("lastUpdate"), at.timestamp_millis())
            .query_async::<_, ()>(&mut con)
            .await?;

        debug!("Recorded submission for '{}'", career);
        Ok(())
    }

    async fn save_api_keys(&self, keys: &UserApiKeys) -> Result<(), StorageError> {
        let raw = serde_json::to_string(keys)?;
        let mut con = self.connection().await?;
        con.set::<_, _, ()>(Self::key("userApiKeys"), raw).await?;
        Ok(())
    }

    async fn clear_api_keys(&self) -> Result<(), StorageError> {
        let mut con = self.connection().await?;
        con.del::<_, ()>(Self::key("userApiKeys")).await?;
        Ok(())
    }
}
