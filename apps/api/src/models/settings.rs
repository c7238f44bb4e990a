use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional user-supplied credentials and backend override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserApiKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub books: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_graph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
}

impl UserApiKeys {
    /// Trims every value and turns blank values into `None`.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            youtube: clean(self.youtube),
            books: clean(self.books),
            knowledge_graph: clean(self.knowledge_graph),
            backend: clean(self.backend),
        }
    }
}

/// State remembered between submissions: last inputs plus user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub last_career: Option<String>,
    pub last_skills: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
    pub user_api_keys: Option<UserApiKeys>,
}

impl PersistedState {
    pub fn backend_override(&self) -> Option<&str> {
        self.user_api_keys
            .as_ref()
            .and_then(|k| k.backend.as_deref())
    }
}
