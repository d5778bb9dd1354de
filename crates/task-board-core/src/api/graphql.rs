//! GraphQL Wire Types
//!
//! Operation documents, the request/response envelopes, and the mapping from
//! GraphQL errors onto `TaskError`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{NewTask, Task, TaskId, TaskPatch};
use crate::error::{TaskError, TaskResult};

// ========================
// Documents
// ========================

pub const GET_TASKS: &str = r#"query GetTasks {
  getTasks {
    _id
    title
    description
    status
  }
}"#;

pub const CREATE_TASK: &str = r#"mutation CreateTask($title: String!, $description: String!, $status: String!) {
  createTask(title: $title, description: $description, status: $status) {
    _id
    title
    description
    status
  }
}"#;

pub const UPDATE_TASK: &str = r#"mutation UpdateTask($id: ID!, $title: String, $description: String, $status: String) {
  updateTask(id: $id, title: $title, description: $description, status: $status) {
    _id
    title
    description
    status
  }
}"#;

pub const DELETE_TASK: &str = r#"mutation DeleteTask($id: ID!) {
  deleteTask(id: $id) {
    _id
  }
}"#;

// ========================
// Envelopes
// ========================

/// Body of a GraphQL-over-HTTP POST
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: Value,
    pub operation_name: &'static str,
}

#[derive(Serialize)]
struct UpdateVariables<'a> {
    id: &'a TaskId,
    #[serde(flatten)]
    patch: &'a TaskPatch,
}

#[derive(Serialize)]
struct IdVariables<'a> {
    id: &'a TaskId,
}

impl GraphQlRequest {
    pub fn get_tasks() -> Self {
        Self {
            query: GET_TASKS,
            variables: Value::Object(Default::default()),
            operation_name: "GetTasks",
        }
    }

    pub fn create_task(task: &NewTask) -> TaskResult<Self> {
        Ok(Self {
            query: CREATE_TASK,
            variables: serde_json::to_value(task)?,
            operation_name: "CreateTask",
        })
    }

    pub fn update_task(id: &TaskId, patch: &TaskPatch) -> TaskResult<Self> {
        Ok(Self {
            query: UPDATE_TASK,
            variables: serde_json::to_value(UpdateVariables { id, patch })?,
            operation_name: "UpdateTask",
        })
    }

    pub fn delete_task(id: &TaskId) -> TaskResult<Self> {
        Ok(Self {
            query: DELETE_TASK,
            variables: serde_json::to_value(IdVariables { id })?,
            operation_name: "DeleteTask",
        })
    }
}

/// One entry of the `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
}

impl GraphQlError {
    fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.code.as_deref()
    }

    /// Classify by error code, falling back to the message text
    pub fn classify(&self) -> TaskError {
        let message = self.message.clone();
        match self.code() {
            Some("BAD_USER_INPUT") | Some("GRAPHQL_VALIDATION_FAILED") | Some("GRAPHQL_PARSE_FAILED") => {
                TaskError::Validation(message)
            }
            Some("NOT_FOUND") => TaskError::NotFound(message),
            _ if message.to_ascii_lowercase().contains("not found") => TaskError::NotFound(message),
            _ => TaskError::Server(message),
        }
    }
}

/// Response envelope; `data` is keyed by the root field name
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Extract and decode `data.<field>`.
    ///
    /// Errors win over data. A missing or null field is `NotFound`, which is
    /// how resolvers report an unknown id for update/delete.
    pub fn into_field<T: DeserializeOwned>(self, field: &str) -> TaskResult<T> {
        if let Some(first) = self.errors.first() {
            return Err(first.classify());
        }
        let value = self
            .data
            .and_then(|mut data| data.get_mut(field).map(Value::take))
            .unwrap_or(Value::Null);
        if value.is_null() {
            return Err(TaskError::NotFound(format!("{} returned no result", field)));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Shape of the `deleteTask` payload
#[derive(Debug, Deserialize)]
pub struct DeletedTask {
    #[serde(rename = "_id")]
    pub id: TaskId,
}

/// Decode a `getTasks` response
pub fn decode_tasks(response: GraphQlResponse) -> TaskResult<Vec<Task>> {
    if let Some(first) = response.errors.first() {
        return Err(first.classify());
    }
    let empty = response
        .data
        .as_ref()
        .and_then(|data| data.get("getTasks"))
        .map_or(true, Value::is_null);
    if empty {
        return Ok(Vec::new());
    }
    response.into_field("getTasks")
}
