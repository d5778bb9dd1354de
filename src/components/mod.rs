//! UI Components
//!
//! Leptos components of the task board.

mod error_banner;
mod status_selector;
mod task_form;
mod task_row;
mod task_table;

pub use error_banner::ErrorBanner;
pub use status_selector::StatusSelector;
pub use task_form::TaskForm;
pub use task_row::TaskRow;
pub use task_table::TaskTable;
