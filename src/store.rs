//! Global Application State Store
//!
//! Uses Leptos reactive_stores; components subscribe to `board` and read
//! `config` untracked.

use leptos::prelude::*;
use reactive_stores::Store;
use task_board_core::{BoardConfig, BoardHandle, BoardState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Task list, form and in-flight markers
    pub board: BoardState,
    pub config: BoardConfig,
}

impl AppState {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: BoardState::new(config.refresh),
            config,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// The store's `board` field as a place the shared flows can update
#[derive(Clone, Copy)]
pub struct BoardStore(pub AppStore);

impl BoardHandle for BoardStore {
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        f(&mut self.0.board().write())
    }
}
