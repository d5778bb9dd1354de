#![allow(warnings)]
//! Task Board Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use task_board_core::GraphQlClient;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load_config();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level())
            .build(),
    );
    if let Some(err) = config_error {
        tracing::warn!("[CONFIG] {}, using defaults", err);
    }

    let api = match GraphQlClient::new(&config) {
        Ok(api) => api,
        Err(err) => {
            tracing::error!("[APP] could not build the GraphQL client: {}", err);
            mount_to_body(move || view! { <h1>"Could not start: " {err.to_string()}</h1> });
            return;
        }
    };
    tracing::info!("[APP] GraphQL endpoint: {}", api.endpoint());

    mount_to_body(move || view! { <App config=config api=api /> });
}
