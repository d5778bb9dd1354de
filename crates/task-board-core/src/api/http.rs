//! GraphQL HTTP Client
//!
//! `TaskApi` over GraphQL-over-HTTP. Uses reqwest, which goes through
//! `fetch` when compiled for the browser.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::graphql::{decode_tasks, DeletedTask, GraphQlRequest, GraphQlResponse};
use super::TaskApi;
use crate::config::BoardConfig;
use crate::domain::{NewTask, Task, TaskId, TaskPatch};
use crate::error::{TaskError, TaskResult};

/// Client for the task GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
    list_retries: u32,
    retry_backoff: Duration,
}

impl GraphQlClient {
    pub fn new(config: &BoardConfig) -> TaskResult<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_millis(config.request_timeout_ms));
        let http = builder.build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            list_retries: config.list_retries,
            retry_backoff: Duration::from_millis(config.list_retry_backoff_ms),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one operation and parse the envelope
    async fn execute(&self, request: &GraphQlRequest) -> TaskResult<GraphQlResponse> {
        tracing::debug!("[GQL] {} -> {}", request.operation_name, self.endpoint);
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // GraphQL servers may answer 4xx/5xx with a normal error envelope
        match serde_json::from_str::<GraphQlResponse>(&body) {
            Ok(parsed) if parsed.data.is_some() || !parsed.errors.is_empty() => Ok(parsed),
            _ if status.is_success() => Err(TaskError::Decode(format!(
                "{}: unexpected body from {}",
                request.operation_name, self.endpoint
            ))),
            _ => Err(status_error(status)),
        }
    }
}

/// Wait before a list retry: the base delay, doubled per earlier attempt
async fn backoff(base: Duration, attempt: u32) {
    let delay = base.saturating_mul(1 << attempt.saturating_sub(1).min(8));
    if delay.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}

fn status_error(status: StatusCode) -> TaskError {
    if status.is_client_error() {
        TaskError::Validation(format!("HTTP {}", status))
    } else {
        TaskError::Network(format!("HTTP {}", status))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TaskApi for GraphQlClient {
    async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        let request = GraphQlRequest::get_tasks();
        let mut attempt = 0;
        loop {
            match self.execute(&request).await.and_then(decode_tasks) {
                Err(err) if err.is_retryable() && attempt < self.list_retries => {
                    attempt += 1;
                    tracing::warn!("[GQL] GetTasks failed ({}), retry {}/{}", err, attempt, self.list_retries);
                    backoff(self.retry_backoff, attempt).await;
                }
                result => return result,
            }
        }
    }

    async fn create_task(&self, task: &NewTask) -> TaskResult<Task> {
        let request = GraphQlRequest::create_task(task)?;
        self.execute(&request).await?.into_field("createTask")
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskResult<Task> {
        let request = GraphQlRequest::update_task(id, patch)?;
        self.execute(&request).await?.into_field("updateTask")
    }

    async fn delete_task(&self, id: &TaskId) -> TaskResult<TaskId> {
        let request = GraphQlRequest::delete_task(id)?;
        let deleted: DeletedTask = self.execute(&request).await?.into_field("deleteTask")?;
        Ok(deleted.id)
    }
}
