//! Task Table Component
//!
//! Lists every task in server order.

use leptos::prelude::*;

use super::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Table of all tasks
#[component]
pub fn TaskTable() -> impl IntoView {
    let store = use_app_store();
    let tasks = Memo::new(move |_| store.board().read().tasks.tasks().to_vec());

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Description"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || tasks.get()
                    // Every rendered field is in the key so edits re-render the row
                    key=|task| (task.id.clone(), task.title.clone(), task.description.clone(), task.status)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </tbody>
        </table>
    }
}
