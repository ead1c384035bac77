use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// A centered popup rectangle of the given inner size, clamped to the area.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

fn popup_block(app: &App, title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background))
}

pub fn render_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confirm) = &app.confirm else { return };

    let width = (unicode::display_width(&confirm.message) as u16 + 6).clamp(30, area.width);
    let rect = centered_rect(area, width, 6);
    frame.render_widget(Clear, rect);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", confirm.message),
            Style::default().fg(app.theme.text_bright),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", app.labels.confirm_keys),
            Style::default().fg(app.theme.dim),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(app, &confirm.title)),
        rect,
    );
}

pub fn render_info(frame: &mut Frame, app: &App, area: Rect) {
    let Some(info) = &app.info else { return };

    let width = (unicode::display_width(&info.message) as u16 + 6).clamp(30, area.width);
    let rect = centered_rect(area, width, 6);
    frame.render_widget(Clear, rect);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", info.message),
            Style::default().fg(app.theme.text_bright),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", app.labels.info_keys),
            Style::default().fg(app.theme.dim),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(app, &info.title)),
        rect,
    );
}

pub fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.prompt else { return };

    let rect = centered_rect(area, 44.min(area.width), 7);
    frame.render_widget(Clear, rect);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", prompt.label),
            Style::default().fg(app.theme.dim),
        )),
        Line::from(Span::styled(
            format!(" {}", prompt.buffer),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", app.labels.prompt_keys),
            Style::default().fg(app.theme.dim),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(app, &prompt.title)),
        rect,
    );

    // Cursor inside the input line (block border + leading space)
    let col = unicode::byte_offset_to_display_col(&prompt.buffer, prompt.cursor);
    frame.set_cursor_position((rect.x + 2 + col as u16, rect.y + 3));
}
