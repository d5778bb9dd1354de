//! Task Commands
//!
//! Async entry points behind the view's event handlers. The flows themselves
//! live in `task_board_core::board`; errors end up in `BoardState::error`.

mod task;

pub use task::*;
