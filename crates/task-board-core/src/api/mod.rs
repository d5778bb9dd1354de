//! API Layer - Core Traits
//!
//! `TaskApi` is the seam between the board and the remote task collection.
//! The GraphQL client talks to a real server; the in-memory implementation
//! stands in for one in tests.

use async_trait::async_trait;

use crate::domain::{NewTask, Task, TaskId, TaskPatch};
use crate::error::TaskResult;

pub mod graphql;
mod http;
mod memory;

pub use http::GraphQlClient;
pub use memory::InMemoryTaskApi;

/// Remote operations on the task collection
///
/// Futures are not `Send` on wasm32, where requests go through `fetch`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TaskApi {
    /// All tasks, in server order
    async fn list_tasks(&self) -> TaskResult<Vec<Task>>;

    /// Create a task; the server assigns its id
    async fn create_task(&self, task: &NewTask) -> TaskResult<Task>;

    /// Merge the supplied fields into the task with `id`
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskResult<Task>;

    /// Remove the task with `id`, returning the removed id
    async fn delete_task(&self, id: &TaskId) -> TaskResult<TaskId>;
}
