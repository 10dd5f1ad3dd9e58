mod confirm;
mod edit;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode, View};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use search::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C quits from any mode
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_edit(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Options => handle_confirm(app, key),
    }
}

/// Handle a bracketed paste event. Only active while typing; newlines become spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    match app.mode {
        Mode::Insert => {
            app.editor.insert_str(text);
            sync_input(app);
        }
        Mode::Search => {
            app.search.insert_str(text);
            sync_query(app);
        }
        Mode::Navigate | Mode::Options => {}
    }
}

/// Plain characters typed into a text field (no Ctrl/Alt chords)
fn is_text_key(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}
