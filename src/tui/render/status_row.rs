use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

/// Bottom row: a transient status message, otherwise key hints for the
/// current view and mode.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if let Some(message) = &app.status_message {
        let paragraph = Paragraph::new(format!(" {}", message))
            .style(Style::default().fg(app.theme.green).bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let hint = match (app.view, app.mode) {
        (_, Mode::Edit) => app.labels.hint_edit,
        (View::Dashboard, _) => app.labels.hint_dashboard,
        (View::Project, _) => app.labels.hint_project,
        (View::Settings, _) => app.labels.hint_settings,
    };
    let paragraph =
        Paragraph::new(format!(" {}", hint)).style(Style::default().fg(app.theme.dim).bg(bg));
    frame.render_widget(paragraph, area);
}
