use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::util::text::{display_width, truncate_to_width};

use super::helpers::{
    HEADER_ROWS, input_line, pad_to_width, scroll_offset, search_line,
};
use super::push_highlighted_spans;

/// Columns before the task text: margin, selection mark, space, checkbox, space
const TEXT_INDENT: usize = 7;

/// Render the task list screen: input row, search bar, then two rows per task
pub fn render_task_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut lines: Vec<Line> = vec![
        input_line(app, "New task", width),
        search_line(app, width),
        Line::from(""),
    ];

    let visible = app.tasks.visible();
    if app.tasks.store().is_empty() {
        lines.push(Line::from(Span::styled(
            " No tasks yet",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let list_height = area.height.saturating_sub(HEADER_ROWS) as usize;
    let skip = scroll_offset(app.task_cursor, 2, list_height);
    let search_re = app.active_search_re();

    let mut rows: Vec<Line> = Vec::with_capacity(visible.len() * 2);
    for (i, task) in visible.iter().enumerate() {
        let is_cursor = i == app.task_cursor;
        let (title, date) = task_rows(app, task, is_cursor, search_re.as_ref(), width);
        rows.push(title);
        rows.push(date);
    }
    lines.extend(rows.into_iter().skip(skip).take(list_height));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Title row (`[x] text  Completed`) and date row for one task
fn task_rows<'a>(
    app: &App,
    task: &Task,
    is_cursor: bool,
    search_re: Option<&regex::Regex>,
    width: usize,
) -> (Line<'a>, Line<'a>) {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    let mark = if task.selected { "\u{25CF}" } else { " " };
    spans.push(Span::styled(
        mark,
        Style::default().fg(theme.selection_mark).bg(bg),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    let check = if task.completed { "[x]" } else { "[ ]" };
    spans.push(Span::styled(
        check,
        Style::default().fg(theme.status_color(task.completed)).bg(bg),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let tag = task.status_label();
    let room = width.saturating_sub(TEXT_INDENT + 2 + display_width(tag));
    let text = truncate_to_width(&task.text, room);
    let mut text_style = Style::default().fg(theme.text_bright).bg(bg);
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    if task.completed {
        text_style = text_style.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
    }
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);
    push_highlighted_spans(&mut spans, &text, text_style, match_style, search_re);

    spans.push(Span::styled("  ", Style::default().bg(bg)));
    spans.push(Span::styled(
        tag,
        Style::default().fg(theme.status_color(task.completed)).bg(bg),
    ));
    if is_cursor {
        pad_to_width(&mut spans, width, Style::default().bg(bg));
    }

    let date = Line::from(vec![
        Span::styled(" ".repeat(TEXT_INDENT), Style::default().bg(theme.background)),
        Span::styled(
            task.date.clone(),
            Style::default().fg(theme.dim).bg(theme.background),
        ),
    ]);

    (Line::from(spans), date)
}
