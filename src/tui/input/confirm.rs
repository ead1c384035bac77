use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, InfoFollowUp, Mode, View};

/// Keys while a confirmation popup is open
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y (or j, the German yes)
        (KeyModifiers::NONE, KeyCode::Char('y') | KeyCode::Char('j')) => {
            let state = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                app.execute_confirm(state.action);
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

/// Keys while an info popup is open: any acknowledging key dismisses it,
/// then its follow-up effect runs
pub(super) fn handle_info(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
            let state = app.info.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state
                && state.follow_up == InfoFollowUp::GoToDashboard
            {
                app.project = None;
                app.editor = None;
                app.view = View::Dashboard;
                app.reload_projects();
            }
        }
        _ => {}
    }
}
