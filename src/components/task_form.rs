//! Task Form Component
//!
//! Create/edit form. The submit button label follows the form mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_board_core::{FormAction, FormState};

use super::StatusSelector;
use crate::commands;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Form for creating a task, or updating the one being edited
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let form = Memo::new(move |_| store.board().read().form.clone());
    let submitting = Memo::new(move |_| store.board().read().submitting);

    let dispatch = move |action: FormAction| store.board().write().dispatch(action);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(commands::submit_form(ctx));
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Task Title"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| dispatch(FormAction::SetTitle(event_target_value(&ev)))
            />
            <textarea
                placeholder="Task Description"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| dispatch(FormAction::SetDescription(event_target_value(&ev)))
            ></textarea>
            <StatusSelector
                current_status=Signal::derive(move || form.with(|f| f.status))
                on_change=move |status| dispatch(FormAction::SetStatus(status))
            />
            <button type="submit" disabled=move || submitting.get()>
                {move || form.with(FormState::submit_label)}
            </button>
            <Show when=move || form.with(FormState::is_editing)>
                <button type="button" class="cancel-btn" on:click=move |_| dispatch(FormAction::Reset)>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
