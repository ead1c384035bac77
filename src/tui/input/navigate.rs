use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{
    App, ConfirmAction, PromptAction, SETTINGS_ROW_LANGUAGE, SETTINGS_ROW_RESET,
    SETTINGS_ROW_THEME, SETTINGS_ROWS, View,
};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match app.view {
        View::Dashboard => handle_dashboard(app, key),
        View::Project => handle_project(app, key),
        View::Settings => handle_settings(app, key),
    }
}

fn handle_dashboard(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            if !app.projects.is_empty() {
                app.dashboard_cursor = (app.dashboard_cursor + 1).min(app.projects.len() - 1);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.dashboard_cursor = app.dashboard_cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Enter) => {
            if let Some(summary) = app.projects.get(app.dashboard_cursor) {
                let id = summary.id.clone();
                app.open_project(&id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) => {
            let title = app.labels.new_project_title;
            let label = app.labels.name_field;
            app.open_prompt(title, label, PromptAction::NewProject);
        }
        (KeyModifiers::NONE, KeyCode::Char('x')) => {
            if let Some(summary) = app.projects.get(app.dashboard_cursor) {
                let title = app.labels.confirm_delete_project_title;
                let message = summary.name.clone();
                let action = ConfirmAction::DeleteProject {
                    project_id: summary.id.clone(),
                };
                app.request_confirm(title, &message, action);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('s')) => {
            app.view = View::Settings;
            app.settings_cursor = 0;
        }
        _ => {}
    }
}

fn handle_project(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (KeyModifiers::NONE, KeyCode::Esc) => app.close_project(),
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            let len = app.flat_nodes().len();
            if len > 0 {
                app.tree_cursor = (app.tree_cursor + 1).min(len - 1);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.tree_cursor = app.tree_cursor.saturating_sub(1);
        }
        // Activate: populate the detail panel with the cursor node
        (KeyModifiers::NONE, KeyCode::Enter) => app.select_under_cursor(),
        // Edit the (selected or cursor) node's name
        (KeyModifiers::NONE, KeyCode::Char('e')) => app.start_edit(),
        (KeyModifiers::NONE, KeyCode::Char(' ')) => app.toggle_done_under_cursor(),
        (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => {
            app.toggle_expand_under_cursor()
        }
        (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => {
            app.toggle_expand_under_cursor()
        }
        // New phase
        (KeyModifiers::NONE, KeyCode::Char('p')) => {
            let title = app.labels.create_title(crate::model::NodeKind::Phase);
            let label = app.labels.name_field;
            app.open_prompt(&title, label, PromptAction::NewPhase);
        }
        // New child under the cursor node
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            if let Some(flat) = app.cursor_flat()
                && let Some(child_kind) = flat.kind.child_kind()
            {
                let title = app.labels.create_title(child_kind);
                let label = app.labels.name_field;
                app.open_prompt(&title, label, PromptAction::NewChild { parent_id: flat.id });
            }
        }
        // Comment on the cursor node
        (KeyModifiers::NONE, KeyCode::Char('c')) => {
            if let Some(flat) = app.cursor_flat() {
                let title = app.labels.comments;
                let label = app.labels.comments;
                app.open_prompt(title, label, PromptAction::AddComment { node_id: flat.id });
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('x')) => {
            if let Some(flat) = app.cursor_flat() {
                let title = app.labels.confirm_delete_node_title;
                let name = app
                    .project
                    .as_ref()
                    .and_then(|p| p.find_node(&flat.id))
                    .map(|n| n.display_name().to_string())
                    .unwrap_or_default();
                app.request_confirm(title, &name, ConfirmAction::DeleteNode { node_id: flat.id });
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('s')) => {
            app.view = View::Settings;
            app.settings_cursor = 0;
        }
        _ => {}
    }
}

fn handle_settings(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (KeyModifiers::NONE, KeyCode::Esc) => {
            app.view = if app.project.is_some() {
                View::Project
            } else {
                View::Dashboard
            };
        }
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            app.settings_cursor = (app.settings_cursor + 1).min(SETTINGS_ROWS - 1);
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.settings_cursor = app.settings_cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char(' ')) => {
            match app.settings_cursor {
                SETTINGS_ROW_THEME => app.toggle_theme(),
                SETTINGS_ROW_LANGUAGE => app.cycle_language(),
                SETTINGS_ROW_RESET => request_reset(app),
                _ => {}
            }
        }
        _ => {}
    }
}

fn request_reset(app: &mut App) {
    let title = app.labels.confirm_reset_title;
    let message = app.labels.confirm_reset_message;
    app.request_confirm(title, message, ConfirmAction::ResetAllData);
}
