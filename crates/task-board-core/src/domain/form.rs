//! Task Form State
//!
//! The form is a value: every change goes through `FormState::apply`, which
//! consumes the old state and returns the next one.

use serde::{Deserialize, Serialize};

use super::task::{NewTask, Task, TaskId, TaskPatch, TaskStatus};

/// Which remote operation a submit will issue
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Create,
    /// Editing the task with this id
    Edit(TaskId),
}

/// Changes the view can make to the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetTitle(String),
    SetDescription(String),
    SetStatus(TaskStatus),
    /// Copy a row into the form and switch to edit mode
    BeginEdit(Task),
    /// The task with this id is gone; drop it if it is the edit target
    TargetRemoved(TaskId),
    /// Back to an empty create form
    Reset,
}

/// What a submit sends to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewTask),
    Update(TaskId, TaskPatch),
}

/// Fields of the create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub mode: FormMode,
}

impl FormState {
    /// Reducer for form changes
    pub fn apply(self, action: FormAction) -> FormState {
        match action {
            FormAction::SetTitle(title) => FormState { title, ..self },
            FormAction::SetDescription(description) => FormState { description, ..self },
            FormAction::SetStatus(status) => FormState { status, ..self },
            FormAction::BeginEdit(task) => FormState {
                title: task.title,
                description: task.description,
                status: task.status,
                mode: FormMode::Edit(task.id),
            },
            FormAction::TargetRemoved(id) => {
                if self.edit_target() == Some(&id) {
                    FormState::default()
                } else {
                    self
                }
            }
            FormAction::Reset => FormState::default(),
        }
    }

    pub fn edit_target(&self) -> Option<&TaskId> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target().is_some()
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Task"
        } else {
            "Create Task"
        }
    }

    /// The mutation a submit issues; an update carries all three fields
    pub fn submission(&self) -> Submission {
        match &self.mode {
            FormMode::Create => Submission::Create(NewTask::new(
                self.title.clone(),
                self.description.clone(),
                self.status,
            )),
            FormMode::Edit(id) => Submission::Update(
                id.clone(),
                TaskPatch {
                    title: Some(self.title.clone()),
                    description: Some(self.description.clone()),
                    status: Some(self.status),
                },
            ),
        }
    }
}
