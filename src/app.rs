//! Task Board Frontend App
//!
//! Loading indicator until the first list arrives, then the form and table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use task_board_core::{BoardConfig, GraphQlClient, LoadState, TaskError};

use crate::commands;
use crate::components::{ErrorBanner, TaskForm, TaskTable};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

/// Which top-level view to show
#[derive(Clone, PartialEq)]
enum Phase {
    Loading,
    Failed(TaskError),
    Ready,
}

#[component]
pub fn App(config: BoardConfig, api: GraphQlClient) -> impl IntoView {
    let store = Store::new(AppState::new(config));
    let ctx = AppContext::new(store, api);
    provide_context(store);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        spawn_local(commands::load_tasks(ctx));
    });

    let phase = Memo::new(move |_| match &store.board().read().tasks {
        LoadState::Loading => Phase::Loading,
        LoadState::Failed(err) => Phase::Failed(err.clone()),
        LoadState::Loaded(_) => Phase::Ready,
    });

    view! {
        <div class="App">
            {move || match phase.get() {
                Phase::Loading => view! { <h1>"Loading..."</h1> }.into_any(),
                Phase::Failed(err) => view! {
                    <div class="load-error">
                        <h1>"Could not load tasks"</h1>
                        <p>{err.to_string()}</p>
                        <button on:click=move |_| spawn_local(commands::load_tasks(ctx))>"Retry"</button>
                    </div>
                }.into_any(),
                Phase::Ready => view! {
                    <ErrorBanner />
                    <TaskForm />
                    <TaskTable />
                }.into_any(),
            }}
        </div>
    }
}
