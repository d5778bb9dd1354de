//! Board Configuration
//!
//! Deserialized from an optional JSON block; every field has a default.

use serde::{Deserialize, Serialize};

use crate::error::{TaskError, TaskResult};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = match option_env!("TASK_BOARD_GRAPHQL_URL") {
    Some(url) => url,
    None => "http://localhost:4000/graphql",
};

/// How the cached list is brought up to date after a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Re-read the whole list after every write
    #[default]
    Refetch,
    /// Fold the returned record into the list; refetch only after errors
    MergeOnSuccess,
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    pub refresh: RefreshPolicy,
    /// Extra attempts for `listTasks` after a network error
    pub list_retries: u32,
    /// Delay before the first retry; doubled for each one after
    pub list_retry_backoff_ms: u64,
    /// Per-request timeout; not enforced in the browser build
    pub request_timeout_ms: u64,
    /// How long the error banner stays up (0 = until dismissed)
    pub error_dismiss_ms: u32,
    /// `tracing` level name, e.g. "info" or "debug"
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            refresh: RefreshPolicy::default(),
            list_retries: 2,
            list_retry_backoff_ms: 250,
            request_timeout_ms: 10_000,
            error_dismiss_ms: 6_000,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse a JSON config block; missing fields take their defaults
    pub fn from_json(json: &str) -> TaskResult<Self> {
        let config: BoardConfig = serde_json::from_str(json)
            .map_err(|e| TaskError::Validation(format!("invalid board config: {}", e)))?;
        if config.endpoint.trim().is_empty() {
            return Err(TaskError::Validation("board config: endpoint is empty".into()));
        }
        Ok(config)
    }

    /// The configured level, falling back to `Info` on an unknown name
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
