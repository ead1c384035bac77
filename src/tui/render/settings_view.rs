use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ThemePref;
use crate::tui::app::{
    App, SETTINGS_ROW_LANGUAGE, SETTINGS_ROW_RESET, SETTINGS_ROW_THEME, SETTINGS_ROWS,
};

/// Render the settings rows: theme, language, delete all data.
pub fn render_settings_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    for row in 0..SETTINGS_ROWS {
        let selected = row == app.settings_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let label_style = Style::default()
            .fg(if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        let value_style = Style::default().fg(app.theme.highlight).bg(row_bg);

        let line = match row {
            SETTINGS_ROW_THEME => {
                let value = match app.settings.theme {
                    ThemePref::Dark => app.labels.theme_dark,
                    ThemePref::Light => app.labels.theme_light,
                };
                Line::from(vec![
                    Span::styled(format!(" {}: ", app.labels.theme_label), label_style),
                    Span::styled(value, value_style),
                ])
            }
            SETTINGS_ROW_LANGUAGE => Line::from(vec![
                Span::styled(format!(" {}: ", app.labels.language_label), label_style),
                Span::styled(app.settings.language.clone(), value_style),
            ]),
            SETTINGS_ROW_RESET => Line::from(Span::styled(
                format!(" {}", app.labels.delete_all_label),
                if selected {
                    Style::default()
                        .fg(app.theme.red)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.red).bg(row_bg)
                },
            )),
            _ => Line::from(""),
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
