use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the project list with progress percentages.
pub fn render_dashboard(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.projects.is_empty() {
        let hint = Paragraph::new(format!(" {}", app.labels.no_projects))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(hint, area);
        return;
    }

    // Keep the cursor row inside the visible window
    let height = area.height as usize;
    if height > 0 {
        if app.dashboard_cursor < app.dashboard_scroll {
            app.dashboard_scroll = app.dashboard_cursor;
        } else if app.dashboard_cursor >= app.dashboard_scroll + height {
            app.dashboard_scroll = app.dashboard_cursor - height + 1;
        }
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, summary) in app.projects.iter().enumerate().skip(app.dashboard_scroll) {
        if lines.len() >= height {
            break;
        }
        let selected = i == app.dashboard_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let mut name_style = Style::default()
            .fg(if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        if selected {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {}  ", summary.name), name_style),
            Span::styled(
                format!("{}: {}%", app.labels.progress, summary.progress),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::DebugLog;
    use crate::store::{LocalStore, ProjectSummary};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn app_with_summaries(count: usize) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        let debug = DebugLog::new(dir.path());
        let mut app = App::new(Box::new(store), debug).unwrap();
        app.projects = (0..count)
            .map(|i| ProjectSummary {
                id: format!("proj_{i:02}"),
                name: format!("Projekt {i:02}"),
                progress: 0,
            })
            .collect();
        (dir, app)
    }

    fn rendered_rows(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_dashboard(frame, app, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn list_scrolls_to_keep_the_cursor_visible() {
        let (_dir, mut app) = app_with_summaries(12);
        app.dashboard_cursor = 11;
        let rows = rendered_rows(&mut app, 40, 5);
        let text = rows.join("\n");
        assert!(text.contains("Projekt 11"), "selected row off screen:\n{text}");
        assert!(!text.contains("Projekt 00"));
    }

    #[test]
    fn scrolling_back_up_follows_the_cursor() {
        let (_dir, mut app) = app_with_summaries(12);
        app.dashboard_cursor = 11;
        rendered_rows(&mut app, 40, 5);
        assert_eq!(app.dashboard_scroll, 7);

        app.dashboard_cursor = 2;
        let rows = rendered_rows(&mut app, 40, 5);
        let text = rows.join("\n");
        assert_eq!(app.dashboard_scroll, 2);
        assert!(text.contains("Projekt 02"));
    }

    #[test]
    fn short_lists_do_not_scroll() {
        let (_dir, mut app) = app_with_summaries(3);
        app.dashboard_cursor = 2;
        let rows = rendered_rows(&mut app, 40, 5);
        assert_eq!(app.dashboard_scroll, 0);
        assert!(rows[0].contains("Projekt 00"));
        assert!(rows[2].contains("Projekt 02"));
    }
}
