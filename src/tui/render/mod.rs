pub mod dashboard_view;
pub mod detail_view;
pub mod popups;
pub mod settings_view;
pub mod status_row;
pub mod tree_view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function, dispatching to the per-view sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    match app.view {
        View::Dashboard => dashboard_view::render_dashboard(frame, app, chunks[1]),
        View::Project => {
            // Tree on the left, detail editor panel on the right
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);
            tree_view::render_tree_view(frame, app, halves[0]);
            detail_view::render_detail_view(frame, app, halves[1]);
        }
        View::Settings => settings_view::render_settings_view(frame, app, chunks[1]),
    }

    status_row::render_status_row(frame, app, chunks[2]);

    // Popups on top of everything
    if app.prompt.is_some() {
        popups::render_prompt(frame, app, area);
    }
    if app.confirm.is_some() {
        popups::render_confirm(frame, app, area);
    }
    if app.info.is_some() {
        popups::render_info(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![
        Span::styled(
            format!(" {} ", app.labels.app_title),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(app.theme.dim).bg(bg)),
    ];
    let view_label = match app.view {
        View::Dashboard => app.labels.dashboard.to_string(),
        View::Settings => app.labels.settings.to_string(),
        View::Project => app
            .project
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default(),
    };
    spans.push(Span::styled(
        view_label,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        ratatui::widgets::Paragraph::new(vec![Line::from(spans), Line::from("")]),
        area,
    );
}
