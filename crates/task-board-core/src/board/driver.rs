//! Task Board Driver
//!
//! Owns a `BoardState` and runs the shared board flows against it, one at a
//! time.

use std::cell::RefCell;

use super::{flow, BoardState};
use crate::api::TaskApi;
use crate::config::RefreshPolicy;
use crate::domain::{FormAction, TaskId};
use crate::error::TaskResult;

/// A board bound to an API
pub struct TaskBoard<A> {
    api: A,
    state: BoardState,
}

impl<A: TaskApi> TaskBoard<A> {
    pub fn new(api: A, refresh: RefreshPolicy) -> Self {
        Self {
            api,
            state: BoardState::new(refresh),
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial load; also used to retry a failed one
    pub async fn load(&mut self) {
        let board = RefCell::new(&mut self.state);
        flow::load_tasks(&self.api, &board).await;
    }

    pub async fn refresh(&mut self) -> bool {
        let board = RefCell::new(&mut self.state);
        flow::refresh_tasks(&self.api, &board).await
    }

    pub fn dispatch(&mut self, action: FormAction) {
        self.state.dispatch(action);
    }

    pub fn edit(&mut self, id: &TaskId) -> bool {
        self.state.edit(id)
    }

    /// Submit the form as a create or update. Returns the error, if any,
    /// which also stays in `state().error`.
    pub async fn submit(&mut self) -> TaskResult<()> {
        let board = RefCell::new(&mut self.state);
        flow::submit_form(&self.api, &board).await
    }

    pub async fn delete(&mut self, id: &TaskId) -> TaskResult<()> {
        let board = RefCell::new(&mut self.state);
        flow::delete_task(&self.api, &board, id).await
    }
}
