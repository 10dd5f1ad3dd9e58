use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::util::text::LineEditor;

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything; ? and Esc close it
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab | KeyCode::BackTab => switch_view(app),

        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.set_cursor(0),
        KeyCode::Char('G') | KeyCode::End => {
            let last = app.visible_len().saturating_sub(1);
            app.set_cursor(last);
        }

        KeyCode::Char('a') | KeyCode::Char('i') => enter_insert(app),
        KeyCode::Char('/') => begin_search(app),
        KeyCode::Esc => clear_search(app),
        KeyCode::Char('x') => delete_cursor_item(app),

        _ if app.view == View::Tasks => handle_task_key(app, key),
        _ => {}
    }
}

/// Keys that only mean something on the task list
fn handle_task_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') => {
            if let Some(id) = app.cursor_task_id()
                && app.tasks.begin_edit(id)
            {
                enter_insert(app);
            }
        }
        KeyCode::Enter => {
            if let Some(id) = app.cursor_task_id()
                && app.tasks.choose(id)
            {
                app.mode = Mode::Options;
            }
        }
        KeyCode::Char(' ') => {
            if let Some(id) = app.cursor_task_id() {
                app.tasks.toggle_completion(id);
            }
        }
        KeyCode::Char('v') => {
            if let Some(id) = app.cursor_task_id() {
                app.tasks.toggle_selection(id);
            }
        }
        KeyCode::Char('E') => {
            if app.tasks.edit_selected() {
                enter_insert(app);
            }
        }
        KeyCode::Char('D') => {
            let removed = app.tasks.delete_selected();
            if !removed.is_empty() {
                app.status_message = Some(format!("deleted {}", plural(removed.len())));
            }
            app.clamp_cursors();
        }
        KeyCode::Char('C') => {
            let n = app.tasks.complete_selected();
            if n > 0 {
                app.status_message = Some(format!("completed {}", plural(n)));
            }
        }
        KeyCode::Char('U') => {
            let n = app.tasks.reopen_selected();
            if n > 0 {
                app.status_message = Some(format!("reopened {}", plural(n)));
            }
        }
        _ => {}
    }
}

fn plural(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", n)
    }
}

fn switch_view(app: &mut App) {
    app.view = match app.view {
        View::Tasks => View::Notes,
        View::Notes => View::Tasks,
    };
    debug!(view = ?app.view, "switched view");
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.visible_len();
    if len == 0 {
        app.set_cursor(0);
        return;
    }
    let next = app.cursor().saturating_add_signed(delta).min(len - 1);
    app.set_cursor(next);
}

/// Focus the input with whatever the current view's buffer holds
pub(super) fn enter_insert(app: &mut App) {
    app.editor = LineEditor::with_text(app.input());
    app.mode = Mode::Insert;
}

fn begin_search(app: &mut App) {
    app.search = LineEditor::with_text(app.query());
    app.mode = Mode::Search;
}

fn clear_search(app: &mut App) {
    match app.view {
        View::Tasks => app.tasks.clear_query(),
        View::Notes => app.notes.clear_query(),
    }
    app.search.clear();
    app.clamp_cursors();
}

fn delete_cursor_item(app: &mut App) {
    match app.view {
        View::Tasks => {
            if let Some(id) = app.cursor_task_id() {
                app.tasks.delete(id);
            }
        }
        View::Notes => {
            if let Some(id) = app.cursor_note_id() {
                app.notes.delete(id);
            }
        }
    }
    app.clamp_cursors();
}
