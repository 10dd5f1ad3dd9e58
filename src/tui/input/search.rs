use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: drop the query entirely
        (_, KeyCode::Esc) => {
            app.search.clear();
            app.mode = Mode::Navigate;
        }
        // Keep the query and go back to the list
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
            return;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.search.delete_word_back(),
        (_, KeyCode::Backspace) => app.search.backspace(),
        (_, KeyCode::Delete) => app.search.delete(),
        (_, KeyCode::Left) => app.search.move_left(),
        (_, KeyCode::Right) => app.search.move_right(),
        (_, KeyCode::Home) => app.search.move_home(),
        (_, KeyCode::End) => app.search.move_end(),
        _ => match is_text_key(&key) {
            Some(c) => app.search.insert_char(c),
            None => return,
        },
    }
    sync_query(app);
}

/// Push the search bar text into the current view's filter
pub(super) fn sync_query(app: &mut App) {
    let query = app.search.text().to_string();
    match app.view {
        View::Tasks => app.tasks.set_query(query),
        View::Notes => app.notes.set_query(query),
    }
    app.clamp_cursors();
}
