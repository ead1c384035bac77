use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Comment;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the right-hand detail panel for the node under edit. Empty when
/// no node has been selected yet.
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let editor = match &app.editor {
        Some(e) => e,
        None => {
            let hint = Paragraph::new(format!(" {}", app.labels.editor_hint))
                .style(Style::default().fg(app.theme.dim).bg(bg));
            frame.render_widget(hint, area);
            return;
        }
    };

    let mut lines: Vec<Line> = Vec::new();

    // Panel title: the node's display name at selection time
    lines.push(Line::from(Span::styled(
        format!(" {}", editor.title),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    // Name field label, e.g. "Phase-Name"
    lines.push(Line::from(Span::styled(
        format!(" {}", app.labels.name_label(editor.kind)),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let editing = app.mode == Mode::Edit;
    let input_style = if editing {
        Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let input_row = lines.len() as u16;
    lines.push(Line::from(Span::styled(
        format!(" {}", editor.buffer),
        input_style,
    )));

    // Comments
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", app.labels.comments),
        Style::default()
            .fg(app.theme.text)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));

    let comments: Vec<Comment> = app
        .project
        .as_ref()
        .and_then(|p| p.find_node(&editor.node_id))
        .map(|n| n.comments.clone())
        .unwrap_or_default();

    if comments.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}", app.labels.no_comments),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        for comment in &comments {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", comment.author),
                    Style::default().fg(app.theme.yellow).bg(bg),
                ),
                Span::styled(
                    format_timestamp(comment.timestamp),
                    Style::default().fg(app.theme.dim).bg(bg),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", comment.text),
                Style::default().fg(app.theme.text).bg(bg),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    // Place the terminal cursor inside the input line while editing
    if editing {
        let col = unicode::byte_offset_to_display_col(&editor.buffer, editor.cursor);
        frame.set_cursor_position((
            area.x + 1 + col as u16,
            area.y + input_row,
        ));
    }
}

/// Millisecond timestamp rendered in local time, e.g. "07.03.2026 14:05"
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%d.%m.%Y %H:%M")
            .to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_handles_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), "");
    }

    #[test]
    fn format_timestamp_produces_date_and_time() {
        let s = format_timestamp(1_700_000_000_000);
        assert_eq!(s.len(), "dd.mm.yyyy hh:mm".len());
        assert!(s.contains('.') && s.contains(':'));
    }
}
