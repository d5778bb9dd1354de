//! Task Row Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_board_core::{Task, TaskStatus};

use crate::commands;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// One table row with Edit and Delete actions
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = task.id.clone();
    let editing = {
        let id = id.clone();
        Memo::new(move |_| store.board().read().form.edit_target() == Some(&id))
    };
    let deleting = {
        let id = id.clone();
        Memo::new(move |_| store.board().read().is_deleting(&id))
    };

    let edit_id = id.clone();
    let on_edit = move |_: web_sys::MouseEvent| {
        if !store.board().write().edit(&edit_id) {
            tracing::warn!("[ROW] task {} is no longer listed", edit_id);
        }
    };
    let on_delete = move |_: web_sys::MouseEvent| spawn_local(commands::delete_task(ctx, id.clone()));

    let status_class = match task.status {
        TaskStatus::Pending => "status pending",
        TaskStatus::Completed => "status completed",
    };

    view! {
        <tr class=move || if editing.get() { "task-row editing" } else { "task-row" }>
            <td>{task.title}</td>
            <td>{task.description}</td>
            <td class=status_class>{task.status.as_str()}</td>
            <td class="actions">
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                <button class="delete-btn" disabled=move || deleting.get() on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
