//! Board State
//!
//! Everything the view shows, plus the transitions around each remote call.
//! Callers pair a `begin_*` with the matching `finish_*` and issue a list
//! refresh whenever a transition answers `FollowUp::Refetch`.

mod driver;
mod flow;

pub use driver::TaskBoard;
pub use flow::{delete_task, load_tasks, refresh_tasks, submit_form, BoardHandle};

use serde::{Deserialize, Serialize};

use crate::config::RefreshPolicy;
use crate::domain::{remove_by_id, upsert, FormAction, FormState, Submission, Task, TaskId};
use crate::error::{TaskError, TaskResult};

/// State of the cached task list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum LoadState {
    /// First load still in flight
    #[default]
    Loading,
    Loaded(Vec<Task>),
    /// First load failed; nothing to show
    Failed(TaskError),
}

impl LoadState {
    pub fn tasks(&self) -> &[Task] {
        match self {
            LoadState::Loaded(tasks) => tasks,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Issued by `begin_load`; orders list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// What the caller should do once a mutation settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Re-read the task list
    Refetch,
    /// Nothing further
    Settled,
}

/// Whole view state of the task board
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub tasks: LoadState,
    pub form: FormState,
    /// A create/update is in flight
    pub submitting: bool,
    /// Ids with a delete in flight
    pub deleting: Vec<TaskId>,
    /// Last error, until dismissed or superseded
    pub error: Option<TaskError>,
    pub refresh: RefreshPolicy,
    /// Edit target of the in-flight submit, if it is an update
    submit_target: Option<TaskId>,
    issued: u64,
    applied: u64,
}

impl BoardState {
    pub fn new(refresh: RefreshPolicy) -> Self {
        Self {
            refresh,
            ..Default::default()
        }
    }

    // ========================
    // Loading
    // ========================

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Apply a list response. Returns false when a newer response already
    /// landed and this one was dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: TaskResult<Vec<Task>>) -> bool {
        if ticket.0 <= self.applied {
            tracing::debug!("[BOARD] dropping stale list response #{} (have #{})", ticket.0, self.applied);
            return false;
        }
        self.applied = ticket.0;

        match result {
            Ok(tasks) => {
                tracing::debug!("[BOARD] loaded {} tasks (#{})", tasks.len(), ticket.0);
                if let Some(target) = self.form.edit_target().cloned() {
                    if !tasks.iter().any(|task| task.id == target) {
                        tracing::info!("[BOARD] edit target {} is gone, resetting form", target);
                        self.dispatch(FormAction::TargetRemoved(target));
                    }
                }
                self.tasks = LoadState::Loaded(tasks);
            }
            Err(err) => {
                tracing::warn!("[BOARD] list failed: {}", err);
                if !matches!(self.tasks, LoadState::Loaded(_)) {
                    self.tasks = LoadState::Failed(err.clone());
                }
                self.error = Some(err);
            }
        }
        true
    }

    /// Go back to the exclusive loading view, e.g. to retry a failed first load
    pub fn reset_to_loading(&mut self) {
        self.tasks = LoadState::Loading;
        self.error = None;
    }

    // ========================
    // Form
    // ========================

    pub fn dispatch(&mut self, action: FormAction) {
        self.form = std::mem::take(&mut self.form).apply(action);
    }

    /// Copy the listed task with `id` into the form. False if it is not listed.
    pub fn edit(&mut self, id: &TaskId) -> bool {
        let row = self.tasks.tasks().iter().find(|task| &task.id == id).cloned();
        match row {
            Some(task) => {
                self.dispatch(FormAction::BeginEdit(task));
                true
            }
            None => false,
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ========================
    // Submit
    // ========================

    /// Start a submit; `None` while another one is still in flight
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        self.submit_target = self.form.edit_target().cloned();
        Some(self.form.submission())
    }

    pub fn finish_submit(&mut self, result: TaskResult<Task>) -> FollowUp {
        self.submitting = false;
        let target = self.submit_target.take();
        match result {
            Ok(task) => {
                tracing::info!("[BOARD] saved task {}", task.id);
                self.dispatch(FormAction::Reset);
                match self.refresh {
                    RefreshPolicy::Refetch => FollowUp::Refetch,
                    RefreshPolicy::MergeOnSuccess => {
                        if let LoadState::Loaded(tasks) = &mut self.tasks {
                            upsert(tasks, task);
                        }
                        FollowUp::Settled
                    }
                }
            }
            Err(err) => {
                tracing::warn!("[BOARD] submit failed: {}", err);
                // A failed create keeps whatever was typed; only a vanished
                // update target invalidates the form and the list
                let follow_up = match target {
                    Some(id) if err.invalidates_list() => {
                        self.dispatch(FormAction::TargetRemoved(id));
                        FollowUp::Refetch
                    }
                    _ => FollowUp::Settled,
                };
                self.error = Some(err);
                follow_up
            }
        }
    }

    // ========================
    // Delete
    // ========================

    /// Start deleting `id`; false while a delete of the same id is in flight
    pub fn begin_delete(&mut self, id: &TaskId) -> bool {
        if self.is_deleting(id) {
            return false;
        }
        self.deleting.push(id.clone());
        self.error = None;
        true
    }

    pub fn is_deleting(&self, id: &TaskId) -> bool {
        self.deleting.contains(id)
    }

    pub fn finish_delete(&mut self, id: &TaskId, result: TaskResult<TaskId>) -> FollowUp {
        self.deleting.retain(|pending| pending != id);
        match result {
            Ok(removed) => {
                tracing::info!("[BOARD] deleted task {}", removed);
                self.dispatch(FormAction::TargetRemoved(removed.clone()));
                match self.refresh {
                    RefreshPolicy::Refetch => FollowUp::Refetch,
                    RefreshPolicy::MergeOnSuccess => {
                        if let LoadState::Loaded(tasks) = &mut self.tasks {
                            remove_by_id(tasks, &removed);
                        }
                        FollowUp::Settled
                    }
                }
            }
            Err(err) => {
                tracing::warn!("[BOARD] delete of {} failed: {}", id, err);
                let follow_up = self.settle_error(err);
                if follow_up == FollowUp::Refetch {
                    self.dispatch(FormAction::TargetRemoved(id.clone()));
                }
                follow_up
            }
        }
    }

    /// Record a mutation error; only a stale-list error asks for a refetch
    fn settle_error(&mut self, err: TaskError) -> FollowUp {
        let follow_up = if err.invalidates_list() {
            FollowUp::Refetch
        } else {
            FollowUp::Settled
        };
        self.error = Some(err);
        follow_up
    }
}
