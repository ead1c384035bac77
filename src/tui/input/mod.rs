mod common;
mod confirm;
mod edit;
mod navigate;
mod prompt;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Edit => edit::handle_edit(app, key),
        Mode::Prompt => prompt::handle_prompt(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
        Mode::Info => confirm::handle_info(app, key),
    }
}
