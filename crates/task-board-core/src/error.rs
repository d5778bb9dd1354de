//! Error Taxonomy
//!
//! Every remote operation resolves to one of these. The view keeps the last
//! one around, so the type is `Clone + PartialEq` and carries only strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for task operations
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors surfaced by the task API
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TaskError {
    /// Connectivity, timeout or an upstream failure without a GraphQL body
    #[error("Network error: {0}")]
    Network(String),

    /// Input rejected by the server
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The update/delete target no longer exists
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other error reported by the GraphQL server
    #[error("Server error: {0}")]
    Server(String),

    /// The response body could not be understood
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl TaskError {
    /// Whether repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, TaskError::Network(_))
    }

    /// Whether the error means the local list may be stale
    pub fn invalidates_list(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }
}

impl From<reqwest::Error> for TaskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TaskError::Decode(err.to_string())
        } else {
            TaskError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        TaskError::Decode(err.to_string())
    }
}
