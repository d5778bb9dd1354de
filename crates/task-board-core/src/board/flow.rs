//! Board Flows
//!
//! The load, submit and delete sequences, written once over any `TaskApi`
//! and any place the `BoardState` lives. The state is only touched between
//! awaits, never across one.

use std::borrow::BorrowMut;
use std::cell::RefCell;

use super::{BoardState, FollowUp};
use crate::api::TaskApi;
use crate::domain::{Submission, TaskId};
use crate::error::TaskResult;

/// Somewhere a `BoardState` can be updated in place
pub trait BoardHandle {
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R;
}

impl<S: BorrowMut<BoardState>> BoardHandle for RefCell<S> {
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        let mut inner = RefCell::borrow_mut(self);
        f(BorrowMut::<BoardState>::borrow_mut(&mut *inner))
    }
}

/// First load, or a retry after the first load failed
pub async fn load_tasks<A: TaskApi, H: BoardHandle>(api: &A, board: &H) {
    board.update(BoardState::reset_to_loading);
    refresh_tasks(api, board).await;
}

/// Re-read the list. False when a newer response had already been applied.
pub async fn refresh_tasks<A: TaskApi, H: BoardHandle>(api: &A, board: &H) -> bool {
    let ticket = board.update(BoardState::begin_load);
    let result = api.list_tasks().await;
    let applied = board.update(|state| state.finish_load(ticket, result));
    if !applied {
        tracing::debug!("[TASKS] newer list already shown");
    }
    applied
}

/// Create or update, depending on the form mode. The error, if any, also
/// stays in `BoardState::error`.
pub async fn submit_form<A: TaskApi, H: BoardHandle>(api: &A, board: &H) -> TaskResult<()> {
    let Some(submission) = board.update(BoardState::begin_submit) else {
        tracing::debug!("[TASKS] submit already in flight");
        return Ok(());
    };
    let result = match &submission {
        Submission::Create(task) => api.create_task(task).await,
        Submission::Update(id, patch) => api.update_task(id, patch).await,
    };
    let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
    let follow_up = board.update(|state| state.finish_submit(result));
    if follow_up == FollowUp::Refetch {
        refresh_tasks(api, board).await;
    }
    outcome
}

pub async fn delete_task<A: TaskApi, H: BoardHandle>(api: &A, board: &H, id: &TaskId) -> TaskResult<()> {
    if !board.update(|state| state.begin_delete(id)) {
        return Ok(());
    }
    let result = api.delete_task(id).await;
    let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
    let follow_up = board.update(|state| state.finish_delete(id, result));
    if follow_up == FollowUp::Refetch {
        refresh_tasks(api, board).await;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryTaskApi;
    use crate::domain::{FormAction, TaskStatus};
    use crate::error::TaskError;

    #[tokio::test]
    async fn test_flows_over_shared_state() {
        let api = InMemoryTaskApi::new();
        let board = RefCell::new(BoardState::default());

        load_tasks(&api, &board).await;
        board.update(|state| state.dispatch(FormAction::SetTitle("A".into())));
        submit_form(&api, &board).await.unwrap();

        let id = board.borrow().tasks.tasks()[0].id.clone();
        assert_eq!(board.borrow().tasks.tasks()[0].status, TaskStatus::Pending);

        delete_task(&api, &board, &id).await.unwrap();
        assert!(board.borrow().tasks.tasks().is_empty());
        assert_eq!(
            api.calls(),
            vec!["getTasks", "createTask", "getTasks", "deleteTask", "getTasks"]
        );
    }

    #[tokio::test]
    async fn test_failed_create_skips_refetch() {
        let api = InMemoryTaskApi::new();
        let board = RefCell::new(BoardState::default());
        load_tasks(&api, &board).await;

        board.update(|state| state.dispatch(FormAction::SetTitle("Buy milk".into())));
        api.fail_next(TaskError::NotFound("createTask returned no result".into()));
        let err = submit_form(&api, &board).await.unwrap_err();

        assert!(matches!(err, TaskError::NotFound(_)));
        assert_eq!(board.borrow().form.title, "Buy milk");
        assert_eq!(api.calls(), vec!["getTasks", "createTask"]);
    }

    #[tokio::test]
    async fn test_slow_list_response_is_dropped() {
        let api = InMemoryTaskApi::new();
        let board = RefCell::new(BoardState::default());
        let slow = board.update(BoardState::begin_load);

        assert!(refresh_tasks(&api, &board).await);
        assert!(!board.update(|state| state.finish_load(slow, Err(TaskError::Network("late".into())))));
        assert!(board.borrow().error.is_none());
    }
}
