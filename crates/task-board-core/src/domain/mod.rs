//! Domain Layer
//!
//! Task entity and the form that edits it.
//! Nothing here talks to the network.

mod entity;
mod form;
mod task;

pub use entity::{remove_by_id, upsert, Entity};
pub use form::{FormAction, FormMode, FormState, Submission};
pub use task::{NewTask, Task, TaskId, TaskPatch, TaskStatus};
