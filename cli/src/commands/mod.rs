//! Commands module - CLI command implementations.

pub mod check;
pub mod interactive;

use common::{AppError, AppResult};
use domain::ValidationState;

/// Render a published state for the terminal
pub fn render_state(state: &ValidationState, json: bool) -> AppResult<String> {
    if json {
        return serde_json::to_string(state)
            .map_err(|e| AppError::internal(format!("Failed to encode state: {}", e)));
    }

    let mut lines = Vec::new();
    if !state.username_message.is_empty() {
        lines.push(format!("username: {}", state.username_message));
    }
    if !state.password_message.is_empty() {
        lines.push(format!("password: {}", state.password_message));
    }
    lines.push(if state.is_form_valid {
        "submit: enabled".to_string()
    } else {
        "submit: disabled".to_string()
    });
    Ok(lines.join("\n"))
}
