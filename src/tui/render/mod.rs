mod helpers;
pub mod help_overlay;
pub mod note_view;
pub mod options_popup;
pub mod status_row;
pub mod tab_bar;
pub mod task_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::{App, Mode, View};
use crate::util::text::display_width;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.view {
        View::Tasks => task_view::render_task_view(frame, app, chunks[1]),
        View::Notes => note_view::render_note_view(frame, app, chunks[1]),
    }

    if app.mode == Mode::Options {
        options_popup::render_options_popup(frame, app, chunks[1]);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);

    place_cursor(frame, app, chunks[1]);
}

/// Show the terminal cursor inside whichever text field has focus
fn place_cursor(frame: &mut Frame, app: &App, content: Rect) {
    if app.show_help || content.height < 2 {
        return;
    }
    let (label_width, col, row) = match app.mode {
        Mode::Insert => (
            display_width(&helpers::input_label(app)),
            app.editor.cursor_col(),
            0,
        ),
        Mode::Search => (
            display_width(helpers::SEARCH_LABEL),
            app.search.cursor_col(),
            1,
        ),
        Mode::Navigate | Mode::Options => return,
    };
    let x = content.x as usize + label_width + col;
    let max_x = (content.x + content.width).saturating_sub(1) as usize;
    frame.set_cursor_position((x.min(max_x) as u16, content.y + row));
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let ranges = match search_re {
        Some(re) => crate::ops::search::match_spans(re, text),
        None => Vec::new(),
    };
    if ranges.is_empty() {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    }

    let mut last_end = 0;
    for range in ranges {
        if range.start > last_end {
            spans.push(Span::styled(
                text[last_end..range.start].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[range.clone()].to_string(),
            highlight_style,
        ));
        last_end = range.end;
    }
    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_task_screen() {
        let app = seeded_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert_snapshot!(output, @r"
         ▶  Tasks 3 │ Notes │
        ────────────┴───────┴───────────────────────────────────────────────────────────
         Add: New task
         Search: / to filter

           [ ] Buy groceries  Pending
               Jul 20, 2023 at 9:00 AM
           [ ] Finish homework  Pending
               Jul 21, 2023 at 3:30 PM
           [x] Read a book  Completed
               Jul 19, 2023 at 6:00 PM












         a add  e edit  Enter options  space done  v select  / search  ? help  q quit
        ");
    }

    #[test]
    fn highlighted_spans_split_on_matches() {
        let re = crate::ops::search::query_regex("o").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(
            &mut spans,
            "Read a book",
            Style::default(),
            Style::default(),
            Some(&re),
        );
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Read a b", "o", "o", "k"]);
    }

    #[test]
    fn highlighted_spans_without_regex() {
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "plain", Style::default(), Style::default(), None);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn options_popup_over_list() {
        let mut app = seeded_app();
        app.tasks.choose(crate::model::task::TaskId(2));
        app.mode = Mode::Options;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert!(output.contains("Finish homework"));
        assert!(output.contains("e    Edit"));
        assert!(output.contains("d    Delete"));
        assert!(output.contains("c    Complete"));
    }

    #[test]
    fn options_popup_offers_unfinish_for_completed() {
        let mut app = seeded_app();
        app.tasks.choose(crate::model::task::TaskId(3));
        app.mode = Mode::Options;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert!(output.contains("c    Unfinish"));
    }

    #[test]
    fn help_overlay_on_top() {
        let mut app = seeded_app();
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Toggle selection"));
    }
}
