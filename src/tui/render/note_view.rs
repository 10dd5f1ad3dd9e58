use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::text::truncate_to_width;

use super::helpers::{HEADER_ROWS, input_line, pad_to_width, scroll_offset, search_line};
use super::push_highlighted_spans;

/// Render the notes screen: input row, search bar, then one row per note
pub fn render_note_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut lines: Vec<Line> = vec![
        input_line(app, "New note", width),
        search_line(app, width),
        Line::from(""),
    ];

    if app.notes.store().is_empty() {
        lines.push(Line::from(Span::styled(
            " No notes yet",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let list_height = area.height.saturating_sub(HEADER_ROWS) as usize;
    let skip = scroll_offset(app.note_cursor, 1, list_height);
    let search_re = app.active_search_re();
    let match_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    for (i, note) in app.notes.visible().iter().enumerate().skip(skip).take(list_height) {
        let is_cursor = i == app.note_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let mut text_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
        if is_cursor {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![Span::styled(
            " \u{2022} ",
            Style::default().fg(app.theme.purple).bg(row_bg),
        )];
        let text = truncate_to_width(&note.text, width.saturating_sub(3));
        push_highlighted_spans(&mut spans, &text, text_style, match_style, search_re.as_ref());
        if is_cursor {
            pad_to_width(&mut spans, width, Style::default().bg(row_bg));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
