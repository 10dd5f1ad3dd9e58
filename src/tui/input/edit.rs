use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            cancel_insert(app);
            return;
        }
        (_, KeyCode::Enter) => {
            submit_insert(app);
            return;
        }

        // Word delete: Ctrl+W or Alt+Backspace
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.editor.delete_word_back(),
        (m, KeyCode::Backspace) if m.contains(KeyModifiers::ALT) => {
            app.editor.delete_word_back()
        }
        (_, KeyCode::Backspace) => app.editor.backspace(),
        (_, KeyCode::Delete) => app.editor.delete(),

        (_, KeyCode::Left) => app.editor.move_left(),
        (_, KeyCode::Right) => app.editor.move_right(),
        (KeyModifiers::CONTROL, KeyCode::Char('a')) | (_, KeyCode::Home) => {
            app.editor.move_home()
        }
        (KeyModifiers::CONTROL, KeyCode::Char('e')) | (_, KeyCode::End) => app.editor.move_end(),

        _ => match is_text_key(&key) {
            Some(c) => app.editor.insert_char(c),
            None => return,
        },
    }
    sync_input(app);
}

/// Mirror the editor into the current view's session buffer
pub(super) fn sync_input(app: &mut App) {
    let text = app.editor.text().to_string();
    match app.view {
        View::Tasks => app.tasks.set_input(text),
        View::Notes => app.notes.set_input(text),
    }
}

fn submit_insert(app: &mut App) {
    match app.view {
        View::Tasks => {
            // Empty text is refused and leaves the input focused
            let was_editing = app.tasks.editing().is_some();
            if let Some(id) = app.tasks.submit() {
                app.editor.clear();
                app.mode = Mode::Navigate;
                if was_editing {
                    app.status_message = Some(format!("updated #{}", id));
                } else if let Some(pos) = app.tasks.visible().iter().position(|t| t.id == id) {
                    app.task_cursor = pos;
                }
            }
        }
        View::Notes => {
            if let Some(id) = app.notes.submit() {
                app.editor.clear();
                app.mode = Mode::Navigate;
                if let Some(pos) = app.notes.visible().iter().position(|n| n.id == id) {
                    app.note_cursor = pos;
                }
            }
        }
    }
}

fn cancel_insert(app: &mut App) {
    match app.view {
        View::Tasks => app.tasks.cancel_edit(),
        View::Notes => app.notes.set_input(""),
    }
    app.editor.clear();
    app.mode = Mode::Navigate;
}
