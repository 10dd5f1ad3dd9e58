use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// Render the tab bar: Tasks and Notes tabs, with separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    // Leading icon
    let bg_style = Style::default().bg(app.theme.background);
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25B6}",
        Style::default().fg(app.theme.purple).bg(app.theme.background),
    ));
    spans.push(Span::styled(" ", bg_style));

    let tabs = [
        (View::Tasks, "Tasks", app.tasks.store().len()),
        (View::Notes, "Notes", app.notes.store().len()),
    ];
    for (view, name, count) in tabs {
        let label = if count > 0 {
            format!(" {} {} ", name, count)
        } else {
            format!(" {} ", name)
        };
        spans.push(Span::styled(label, tab_style(app, app.view == view)));
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    let line = Line::from(spans);
    let tabs = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    let selected = app.tasks.store().selected().len();
    let indicator = if app.view == View::Tasks && selected > 0 {
        Some(format!("{} selected", selected))
    } else {
        None
    };

    // +2: one space before indicator, one space after (right edge buffer)
    let separator_end = match &indicator {
        Some(text) => width.saturating_sub(text.chars().count() + 2),
        None => width,
    };

    let mut sep_text = String::with_capacity(separator_end * 3);
    for col in 0..separator_end {
        if sep_cols.contains(&col) {
            sep_text.push('\u{2534}');
        } else {
            sep_text.push('\u{2500}');
        }
    }

    let mut spans = vec![Span::styled(sep_text, Style::default().fg(dim).bg(bg))];
    if let Some(text) = indicator {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(
            text,
            Style::default().fg(app.theme.selection_mark).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let sep_widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(sep_widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
