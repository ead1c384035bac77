use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::common::{LineEditResult, apply_line_edit};

/// Keys while the detail panel's name input has focus
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(editor) = &mut app.editor else {
        app.mode = crate::tui::app::Mode::Navigate;
        return;
    };

    if apply_line_edit(&mut editor.buffer, &mut editor.cursor, key) == LineEditResult::Handled {
        return;
    }

    match (key.modifiers, key.code) {
        // Save: submit the input's current value
        (KeyModifiers::NONE, KeyCode::Enter) => app.save_editor(),
        // Discard the pending edit
        (KeyModifiers::NONE, KeyCode::Esc) => app.cancel_edit(),
        _ => {}
    }
}
