use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::app::{App, Mode, View};
use crate::util::text::{display_width, truncate_to_width};

/// Rows above the list: input, search bar, blank
pub(super) const HEADER_ROWS: u16 = 3;

/// Label in front of the input row; also where the terminal cursor starts
pub(super) fn input_label(app: &App) -> String {
    match app.tasks.editing() {
        Some(id) if app.view == View::Tasks => format!(" Edit #{}: ", id),
        _ => " Add: ".to_string(),
    }
}

pub(super) const SEARCH_LABEL: &str = " Search: ";

/// The input row: label plus buffer, or a dim placeholder when idle and empty
pub(super) fn input_line<'a>(app: &App, placeholder: &'a str, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let label = input_label(app);
    let label_style = Style::default().fg(app.theme.purple).bg(bg);
    let typing = app.mode == Mode::Insert;
    let text = app.input();

    let mut spans = vec![Span::styled(label.clone(), label_style)];
    if text.is_empty() && !typing {
        spans.push(Span::styled(placeholder, Style::default().fg(app.theme.dim).bg(bg)));
    } else {
        let room = width.saturating_sub(display_width(&label));
        spans.push(Span::styled(
            truncate_to_width(text, room),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    Line::from(spans)
}

/// The search bar row
pub(super) fn search_line<'a>(app: &App, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.purple).bg(bg);
    let query = app.query();

    let mut spans = vec![Span::styled(SEARCH_LABEL, label_style)];
    if query.is_empty() && app.mode != Mode::Search {
        spans.push(Span::styled(
            "/ to filter",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        let room = width.saturating_sub(display_width(SEARCH_LABEL));
        spans.push(Span::styled(
            truncate_to_width(query, room),
            Style::default().fg(app.theme.search_match_bg).bg(bg),
        ));
    }
    Line::from(spans)
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

/// Pad a line out to `width` with the given style (for full-row cursor bars)
pub(super) fn pad_to_width(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// First visible row so that the cursor's rows stay on screen
pub(super) fn scroll_offset(cursor: usize, rows_per_item: usize, height: usize) -> usize {
    let bottom = (cursor + 1) * rows_per_item;
    bottom.saturating_sub(height)
}
