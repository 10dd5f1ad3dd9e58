use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, View};

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 90, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    match app.view {
        View::Tasks => {
            lines.push(Line::from(Span::styled(" Tasks", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " a/i", "Type a new task", key_style, desc_style);
            add_binding(&mut lines, " e", "Edit task", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Task options", key_style, desc_style);
            add_binding(&mut lines, " Space", "Complete / unfinish", key_style, desc_style);
            add_binding(&mut lines, " x", "Delete task", key_style, desc_style);
            add_binding(&mut lines, " v", "Toggle selection", key_style, desc_style);
            add_binding(&mut lines, " E D", "Edit / delete selected", key_style, desc_style);
            add_binding(&mut lines, " C U", "Complete / reopen selected", key_style, desc_style);
        }
        View::Notes => {
            lines.push(Line::from(Span::styled(" Notes", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " a/i", "Type a new note", key_style, desc_style);
            add_binding(&mut lines, " x", "Delete note", key_style, desc_style);
        }
    }
    lines.push(Line::from(""));

    // Global keys
    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " /", "Search (Esc clears)", key_style, desc_style);
    add_binding(&mut lines, " Tab", "Switch screen", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn notes_help_lists_note_keys() {
        let mut app = empty_app();
        app.view = View::Notes;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_help_overlay(frame, &app, area)
        });
        assert!(output.contains("Delete note"));
        assert!(!output.contains("Toggle selection"));
        assert!(output.contains("Quit"));
    }
}
