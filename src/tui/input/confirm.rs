use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

/// Options modal on the chosen task: edit, delete, complete/unfinish or cancel
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if app.tasks.confirm_edit() {
                enter_insert(app);
                return;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(task) = app.tasks.confirm_delete() {
                app.status_message = Some(format!("deleted \"{}\"", task.text));
            }
            app.clamp_cursors();
        }
        (KeyModifiers::NONE, KeyCode::Char('c')) => {
            if let Some(done) = app.tasks.confirm_toggle_completion() {
                let verb = if done { "completed" } else { "reopened" };
                app.status_message = Some(format!("{} task", verb));
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => app.tasks.cancel(),
        _ => return,
    }
    app.mode = Mode::Navigate;
}
