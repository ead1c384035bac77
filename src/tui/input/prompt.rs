use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::common::{LineEditResult, apply_line_edit};

/// Keys while a prompt popup is capturing input
pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    let Some(prompt) = &mut app.prompt else {
        app.mode = Mode::Navigate;
        return;
    };

    if apply_line_edit(&mut prompt.buffer, &mut prompt.cursor, key) == LineEditResult::Handled {
        return;
    }

    match (key.modifiers, key.code) {
        // Submit only on a non-empty trimmed value; stay open otherwise
        (KeyModifiers::NONE, KeyCode::Enter) => {
            let value = prompt.buffer.trim().to_string();
            if value.is_empty() {
                return;
            }
            let action = prompt.action.clone();
            app.prompt = None;
            app.mode = Mode::Navigate;
            app.submit_prompt(action, value);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            app.prompt = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
