use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

const TASK_HINTS: &str =
    " a add  e edit  Enter options  space done  v select  / search  ? help  q quit";
const NOTE_HINTS: &str = " a add  x delete  / search  Tab tasks  ? help  q quit";
const INSERT_HINTS: &str = " Enter save  Esc cancel";
const SEARCH_HINTS: &str = " Enter keep  Esc clear";
const OPTIONS_HINTS: &str = " e edit  d delete  c complete  Esc cancel";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = match (app.mode, app.status_line()) {
        // Messages win over hints while navigating
        (Mode::Navigate, Some(msg)) => Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.highlight).bg(bg),
        )),
        _ if !app.show_key_hints => Line::from(""),
        (mode, _) => Line::from(Span::styled(
            hints(app.view, mode),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn hints(view: View, mode: Mode) -> &'static str {
    match (mode, view) {
        (Mode::Navigate, View::Tasks) => TASK_HINTS,
        (Mode::Navigate, View::Notes) => NOTE_HINTS,
        (Mode::Insert, _) => INSERT_HINTS,
        (Mode::Search, _) => SEARCH_HINTS,
        (Mode::Options, _) => OPTIONS_HINTS,
    }
}
