//! Task Board Core
//!
//! Layered like a small backend:
//! - domain: tasks, statuses and the form reducer
//! - api: the `TaskApi` seam, GraphQL wire types and clients
//! - board: view state transitions, the shared flows and the sequential driver

pub mod api;
pub mod board;
pub mod config;
pub mod domain;
pub mod error;

pub use api::{GraphQlClient, InMemoryTaskApi, TaskApi};
pub use board::{BoardHandle, BoardState, FollowUp, LoadState, LoadTicket, TaskBoard};
pub use config::{BoardConfig, RefreshPolicy};
pub use domain::{
    Entity, FormAction, FormMode, FormState, NewTask, Submission, Task, TaskId, TaskPatch,
    TaskStatus,
};
pub use error::{TaskError, TaskResult};
