//! Error Banner Component
//!
//! Shows the board's last error. Dismissed by hand, or after
//! `error_dismiss_ms` if that is non-zero.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use task_board_core::TaskError;

use crate::store::{use_app_store, AppStateStoreFields};

fn banner_class(err: &TaskError) -> &'static str {
    match err {
        TaskError::Network(_) => "error-banner network",
        TaskError::Validation(_) => "error-banner validation",
        TaskError::NotFound(_) => "error-banner not-found",
        TaskError::Server(_) | TaskError::Decode(_) => "error-banner server",
    }
}

/// Banner for the current error, if any
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();
    let error = Memo::new(move |_| store.board().read().error.clone());
    let dismiss_ms = store.config().read_untracked().error_dismiss_ms;

    Effect::new(move |_| {
        let Some(shown) = error.get() else { return };
        if dismiss_ms == 0 {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(dismiss_ms).await;
            // Only clear it if nothing newer replaced it meanwhile
            let unchanged = store.board().read_untracked().error.as_ref() == Some(&shown);
            if unchanged {
                store.board().write().dismiss_error();
            }
        });
    });

    move || {
        error.get().map(|err| {
            view! {
                <div class=banner_class(&err) role="alert">
                    <span class="error-text">{err.to_string()}</span>
                    <button class="dismiss-btn" on:click=move |_| store.board().write().dismiss_error()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
