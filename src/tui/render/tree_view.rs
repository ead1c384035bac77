use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Project;
use crate::tui::app::{App, FlatNode};
use crate::util::unicode;

/// Render the phase tree as numbered, depth-indented rows.
/// The whole area is redrawn from the model every frame.
pub fn render_tree_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let flat = app.flat_nodes();

    // Empty project: a single informational leaf row
    if flat.is_empty() {
        let hint = Paragraph::new(format!(" {}", app.labels.no_phases))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(hint, area);
        return;
    }

    // Keep the cursor row inside the visible window
    let height = area.height as usize;
    if height > 0 {
        if app.tree_cursor < app.tree_scroll {
            app.tree_scroll = app.tree_cursor;
        } else if app.tree_cursor >= app.tree_scroll + height {
            app.tree_scroll = app.tree_cursor - height + 1;
        }
    }

    let project = match &app.project {
        Some(p) => p,
        None => return,
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in flat.iter().enumerate().skip(app.tree_scroll) {
        if lines.len() >= height {
            break;
        }
        let selected = i == app.tree_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let text = row_text(project, item);
        let truncated = unicode::truncate_to_width(&text, area.width.saturating_sub(2) as usize);

        let done = project.find_node(&item.id).is_some_and(|n| n.done);
        let fg = if selected {
            app.theme.text_bright
        } else if done {
            app.theme.dim
        } else {
            app.theme.text
        };
        let mut style = Style::default().fg(fg).bg(row_bg);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![Span::styled(format!(" {}", truncated), style)];
        if done {
            spans.push(Span::styled(
                " \u{2713}",
                Style::default().fg(app.theme.green).bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// Text of one tree row: indent, expand marker, hierarchical number, name
pub fn row_text(project: &Project, item: &FlatNode) -> String {
    let indent = "  ".repeat(item.depth);
    let marker = if item.has_children {
        if item.is_expanded { "\u{25be} " } else { "\u{25b8} " }
    } else {
        "  "
    };
    let name = project
        .find_node(&item.id)
        .map(|n| n.display_name().to_string())
        .unwrap_or_default();
    format!("{}{}{}. {}", indent, marker, item.number, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::sample_project;
    use crate::tui::app::flatten_project;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn row_text_carries_number_and_name() {
        let project = sample_project();
        let flat = flatten_project(&project, &HashSet::new());
        assert_eq!(row_text(&project, &flat[0]), "\u{25be} 1. Setup");
        assert_eq!(row_text(&project, &flat[2]), "      1.1.1. Create remote");
        assert_eq!(row_text(&project, &flat[5]), "  2. Rohbau");
    }

    #[test]
    fn row_text_shows_placeholder_for_empty_name() {
        let mut project = sample_project();
        project.find_node_mut("phase_2").unwrap().name = String::new();
        let flat = flatten_project(&project, &HashSet::new());
        assert_eq!(
            row_text(&project, &flat[5]),
            format!("  2. {}", crate::model::UNNAMED_LABEL)
        );
    }
}
