//! Application Context
//!
//! The store plus the one GraphQL client the whole app shares, provided via
//! the Leptos Context API.

use leptos::prelude::*;
use task_board_core::GraphQlClient;

use crate::store::{AppStore, BoardStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Built once at startup; reqwest clients share their pool when cloned
    api: StoredValue<GraphQlClient, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, api: GraphQlClient) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
        }
    }

    pub fn api(&self) -> GraphQlClient {
        self.api.get_value()
    }

    /// Write access to the board for the shared flows
    pub fn board(&self) -> BoardStore {
        BoardStore(self.store)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
