//! Page Configuration
//!
//! Optional JSON block embedded in index.html:
//! `<script id="task-board-config" type="application/json">{...}</script>`

use task_board_core::{BoardConfig, TaskError};

const CONFIG_ELEMENT_ID: &str = "task-board-config";

/// Read the page config. A malformed block yields the defaults plus the
/// parse error, which is logged once the logger is up.
pub fn load_config() -> (BoardConfig, Option<TaskError>) {
    let block = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match block {
        Some(json) if !json.trim().is_empty() => match BoardConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(err) => (BoardConfig::default(), Some(err)),
        },
        _ => (BoardConfig::default(), None),
    }
}
