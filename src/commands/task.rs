//! Task Flows
//!
//! Load, submit and delete against the shared client and the app store.

use task_board_core::{board, TaskId};

use crate::context::AppContext;

/// First load, or a retry after the first load failed
pub async fn load_tasks(ctx: AppContext) {
    board::load_tasks(&ctx.api(), &ctx.board()).await;
}

/// Create or update, depending on the form mode
pub async fn submit_form(ctx: AppContext) {
    if let Err(err) = board::submit_form(&ctx.api(), &ctx.board()).await {
        tracing::debug!("[TASKS] submit ended with {:?}", err);
    }
}

pub async fn delete_task(ctx: AppContext, id: TaskId) {
    if let Err(err) = board::delete_task(&ctx.api(), &ctx.board(), &id).await {
        tracing::debug!("[TASKS] delete of {} ended with {:?}", id, err);
    }
}
