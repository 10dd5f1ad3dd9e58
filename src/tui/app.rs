use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;
use tracing::info;

use crate::model::config::AppConfig;
use crate::model::note::NoteId;
use crate::model::task::TaskId;
use crate::ops::search::query_regex;
use crate::ops::{NoteSession, TaskSession, TaskStore};
use crate::util::text::LineEditor;

use super::input;
use super::render;
use super::theme::Theme;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Tasks,
    Notes,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the add/edit input
    Insert,
    /// Typing into the search bar; the filter follows every keystroke
    Search,
    /// Options modal open on a task
    Options,
}

/// Main application state
pub struct App {
    pub tasks: TaskSession,
    pub notes: NoteSession,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible (filtered) task list
    pub task_cursor: usize,
    /// Cursor index into the visible (filtered) note list
    pub note_cursor: usize,
    /// Input line editor; its text is mirrored into the current session's buffer
    pub editor: LineEditor,
    /// Search bar editor
    pub search: LineEditor,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
}

impl App {
    pub fn new(tasks: TaskSession, notes: NoteSession, config: &AppConfig) -> Self {
        App {
            tasks,
            notes,
            view: View::Tasks,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            task_cursor: 0,
            note_cursor: 0,
            editor: LineEditor::default(),
            search: LineEditor::default(),
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            status_message: None,
        }
    }

    /// Fresh sessions built from config, optionally starting with the sample tasks
    pub fn from_config(config: &AppConfig, seed: bool) -> Self {
        let tasks = TaskSession::new(TaskStore::from_config(config, seed));
        App::new(tasks, NoteSession::default(), config)
    }

    /// Number of rows in the current view's visible list
    pub fn visible_len(&self) -> usize {
        match self.view {
            View::Tasks => self.tasks.visible().len(),
            View::Notes => self.notes.visible().len(),
        }
    }

    pub fn cursor(&self) -> usize {
        match self.view {
            View::Tasks => self.task_cursor,
            View::Notes => self.note_cursor,
        }
    }

    pub fn set_cursor(&mut self, idx: usize) {
        match self.view {
            View::Tasks => self.task_cursor = idx,
            View::Notes => self.note_cursor = idx,
        }
    }

    /// Id of the task under the cursor, resolved through the current filter
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.tasks.visible().get(self.task_cursor).map(|t| t.id)
    }

    pub fn cursor_note_id(&self) -> Option<NoteId> {
        self.notes.visible().get(self.note_cursor).map(|n| n.id)
    }

    /// Keep both cursors inside their visible lists
    pub fn clamp_cursors(&mut self) {
        let tasks = self.tasks.visible().len();
        self.task_cursor = self.task_cursor.min(tasks.saturating_sub(1));
        let notes = self.notes.visible().len();
        self.note_cursor = self.note_cursor.min(notes.saturating_sub(1));
    }

    /// Current view's search query
    pub fn query(&self) -> &str {
        match self.view {
            View::Tasks => self.tasks.query(),
            View::Notes => self.notes.query(),
        }
    }

    /// Regex for highlighting matches of the current view's query
    pub fn active_search_re(&self) -> Option<Regex> {
        query_regex(self.query())
    }

    /// Current view's input buffer
    pub fn input(&self) -> &str {
        match self.view {
            View::Tasks => self.tasks.input(),
            View::Notes => self.notes.input(),
        }
    }

    /// Message for the status row: a one-shot app message wins over the session's own
    pub fn status_line(&self) -> Option<String> {
        if let Some(msg) = &self.status_message {
            return Some(msg.clone());
        }
        match self.view {
            View::Tasks => self.tasks.status_message(),
            View::Notes => self.notes.status_message(),
        }
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig, seed: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_config(config, seed);
    info!(
        seed = seed || config.seed.sample_tasks,
        tasks = app.tasks.store().len(),
        "starting tui"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(
        tasks = app.tasks.store().len(),
        notes = app.notes.store().len(),
        "tui closed"
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::TaskStore;

    fn seeded_app() -> App {
        let tasks = TaskSession::new(TaskStore::with_sample_tasks("%Y"));
        App::new(tasks, NoteSession::default(), &AppConfig::default())
    }

    #[test]
    fn test_cursor_resolves_through_filter() {
        let mut app = seeded_app();
        app.tasks.set_query("book");
        app.task_cursor = 0;
        assert_eq!(app.cursor_task_id(), Some(TaskId(3)));
    }

    #[test]
    fn test_clamp_cursors_after_filter() {
        let mut app = seeded_app();
        app.task_cursor = 2;
        app.tasks.set_query("homework");
        app.clamp_cursors();
        assert_eq!(app.task_cursor, 0);
        assert_eq!(app.cursor_task_id(), Some(TaskId(2)));
    }

    #[test]
    fn test_status_line_prefers_app_message() {
        let mut app = seeded_app();
        app.tasks.set_query("zzz");
        assert_eq!(app.status_line().as_deref(), Some("No tasks match \"zzz\""));
        app.status_message = Some("deleted 1 task".into());
        assert_eq!(app.status_line().as_deref(), Some("deleted 1 task"));
    }

    #[test]
    fn test_from_config_seed_flag() {
        let config = AppConfig::default();
        assert!(App::from_config(&config, false).tasks.store().is_empty());
        assert_eq!(App::from_config(&config, true).tasks.store().len(), 3);
    }

    #[test]
    fn test_key_hints_follow_config() {
        let mut config = AppConfig::default();
        config.ui.show_key_hints = false;
        let app = App::from_config(&config, false);
        assert!(!app.show_key_hints);
    }
}
