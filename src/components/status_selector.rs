//! Status Selector Component
//!
//! Select box over every task status.

use leptos::prelude::*;
use task_board_core::TaskStatus;

/// Status select for the task form
#[component]
pub fn StatusSelector(
    #[prop(into)] current_status: Signal<TaskStatus>,
    on_change: impl Fn(TaskStatus) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="status-selector"
            prop:value=move || current_status.get().as_str().to_string()
            on:change=move |ev| {
                match event_target_value(&ev).parse::<TaskStatus>() {
                    Ok(status) => on_change(status),
                    Err(err) => tracing::warn!("[FORM] {}", err),
                }
            }
        >
            {TaskStatus::ALL.into_iter().map(|status| {
                view! {
                    <option
                        value=status.as_str()
                        selected=move || current_status.get() == status
                    >
                        {status.as_str()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
