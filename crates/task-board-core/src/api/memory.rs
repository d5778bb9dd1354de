//! In-Memory Task API
//!
//! Behaves like the GraphQL server: assigns ids, merges partial updates,
//! reports unknown ids as `NotFound`. Failures can be queued to exercise the
//! board's error paths.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::TaskApi;
use crate::domain::{remove_by_id, NewTask, Task, TaskId, TaskPatch};
use crate::error::{TaskError, TaskResult};

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: u64,
    failures: VecDeque<TaskError>,
    calls: Vec<&'static str>,
}

/// Task collection held in process memory
#[derive(Debug, Default)]
pub struct InMemoryTaskApi {
    inner: Mutex<Inner>,
}

impl InMemoryTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing tasks (their ids are kept)
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        api.lock().tasks = tasks;
        api
    }

    /// Make the next call fail with `err`, whichever operation it is
    pub fn fail_next(&self, err: TaskError) {
        self.lock().failures.push_back(err);
    }

    /// Operation names in call order
    pub fn calls(&self) -> Vec<&'static str> {
        self.lock().calls.clone()
    }

    /// Current server-side tasks
    pub fn snapshot(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock can only come from a failing test
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self, op: &'static str) -> TaskResult<MutexGuard<'_, Inner>> {
        let mut inner = self.lock();
        inner.calls.push(op);
        match inner.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(inner),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TaskApi for InMemoryTaskApi {
    async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        let inner = self.begin("getTasks")?;
        Ok(inner.tasks.clone())
    }

    async fn create_task(&self, task: &NewTask) -> TaskResult<Task> {
        let mut inner = self.begin("createTask")?;
        inner.next_id += 1;
        let id = TaskId::new(format!("{:024x}", inner.next_id));
        let created = task.clone().into_task(id);
        inner.tasks.push(created.clone());
        Ok(created)
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskResult<Task> {
        let mut inner = self.begin("updateTask")?;
        let task = inner
            .tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| TaskError::NotFound(format!("task {}", id)))?;
        patch.apply_to(task);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> TaskResult<TaskId> {
        let mut inner = self.begin("deleteTask")?;
        if remove_by_id(&mut inner.tasks, id) {
            Ok(id.clone())
        } else {
            Err(TaskError::NotFound(format!("task {}", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let api = InMemoryTaskApi::new();
        let a = api.create_task(&NewTask::new("A", "d1", TaskStatus::Pending)).await.unwrap();
        let b = api.create_task(&NewTask::new("B", "d2", TaskStatus::Pending)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(api.list_tasks().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let api = InMemoryTaskApi::new();
        let missing = TaskId::new("nope");
        assert!(matches!(
            api.update_task(&missing, &TaskPatch::default()).await,
            Err(TaskError::NotFound(_))
        ));
        assert!(matches!(api.delete_task(&missing).await, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_queued_failure_consumed_once() {
        let api = InMemoryTaskApi::new();
        api.fail_next(TaskError::Network("offline".into()));
        assert!(api.list_tasks().await.is_err());
        assert!(api.list_tasks().await.is_ok());
        assert_eq!(api.calls(), vec!["getTasks", "getTasks"]);
    }
}
