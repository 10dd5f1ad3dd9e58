//! Gesture scripts: a line-oriented stand-in for taps and keystrokes.
//!
//! ```text
//! # comments and blank lines are skipped
//! add Buy milk
//! choose 1
//! confirm toggle
//! search MILK
//! note add Remember the keys
//! ```

use crate::model::note::NoteId;
use crate::model::task::TaskId;
use crate::ops::{NoteSession, TaskSession};

/// Which option was confirmed in the options modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Edit,
    Delete,
    Toggle,
}

/// One user gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Type the text into the input and press add
    Add(String),
    Input(String),
    Submit,
    Edit(TaskId),
    CancelEdit,
    /// Edit, retype and submit in one go
    Update(TaskId, String),
    Delete(TaskId),
    Toggle(TaskId),
    Complete(TaskId),
    Reopen(TaskId),
    Select(TaskId),
    EditSelected,
    DeleteSelected,
    CompleteSelected,
    ReopenSelected,
    ClearSelection,
    Choose(TaskId),
    Confirm(ConfirmChoice),
    Dismiss,
    Search(String),
    ClearSearch,
    NoteAdd(String),
    NoteDelete(NoteId),
    NoteSearch(String),
    NoteClearSearch,
}

/// Error type for script parsing
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },
    #[error("line {line}: invalid id {value:?}")]
    InvalidId { line: usize, value: String },
}

/// Parse a whole script. Nothing is applied if any line is malformed.
pub fn parse_script(src: &str) -> Result<Vec<Gesture>, ScriptError> {
    let mut gestures = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        if let Some(g) = parse_line(raw, idx + 1)? {
            gestures.push(g);
        }
    }
    Ok(gestures)
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Gesture>, ScriptError> {
    let trimmed = raw.trim_end_matches('\r').trim_start();
    if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (command, rest) = split_word(trimmed);
    let id = |expected| parse_id(rest, command, expected, line);

    let gesture = match command {
        "add" => Gesture::Add(rest.to_string()),
        "input" => Gesture::Input(rest.to_string()),
        "submit" => Gesture::Submit,
        "edit" => Gesture::Edit(TaskId(id("a task id")?)),
        "cancel-edit" => Gesture::CancelEdit,
        "update" => {
            let (first, text) = split_word(rest);
            let n = parse_id(first, command, "a task id and text", line)?;
            Gesture::Update(TaskId(n), text.to_string())
        }
        "delete" => Gesture::Delete(TaskId(id("a task id")?)),
        "toggle" => Gesture::Toggle(TaskId(id("a task id")?)),
        "complete" => Gesture::Complete(TaskId(id("a task id")?)),
        "reopen" => Gesture::Reopen(TaskId(id("a task id")?)),
        "select" => Gesture::Select(TaskId(id("a task id")?)),
        "edit-selected" => Gesture::EditSelected,
        "delete-selected" => Gesture::DeleteSelected,
        "complete-selected" => Gesture::CompleteSelected,
        "reopen-selected" => Gesture::ReopenSelected,
        "clear-selection" => Gesture::ClearSelection,
        "choose" => Gesture::Choose(TaskId(id("a task id")?)),
        "confirm" => match rest.trim() {
            "edit" => Gesture::Confirm(ConfirmChoice::Edit),
            "delete" => Gesture::Confirm(ConfirmChoice::Delete),
            "toggle" | "complete" => Gesture::Confirm(ConfirmChoice::Toggle),
            _ => {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: command.to_string(),
                    expected: "edit, delete or toggle",
                });
            }
        },
        "dismiss" => Gesture::Dismiss,
        "search" => Gesture::Search(rest.to_string()),
        "clear-search" => Gesture::ClearSearch,
        "note" => return parse_note(rest, line).map(Some),
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(gesture))
}

fn parse_note(rest: &str, line: usize) -> Result<Gesture, ScriptError> {
    let (sub, text) = split_word(rest);
    Ok(match sub {
        "add" => Gesture::NoteAdd(text.to_string()),
        "delete" => Gesture::NoteDelete(NoteId(parse_id(text, "note delete", "a note id", line)?)),
        "search" => Gesture::NoteSearch(text.to_string()),
        "clear-search" => Gesture::NoteClearSearch,
        "" => {
            return Err(ScriptError::MissingArgument {
                line,
                command: "note".to_string(),
                expected: "add, delete, search or clear-search",
            });
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: format!("note {}", other),
            });
        }
    })
}

/// Split off the first word; the remainder keeps its inner spacing.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

fn parse_id(
    value: &str,
    command: &str,
    expected: &'static str,
    line: usize,
) -> Result<u64, ScriptError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command: command.to_string(),
            expected,
        });
    }
    value.parse().map_err(|_| ScriptError::InvalidId {
        line,
        value: value.to_string(),
    })
}

impl Gesture {
    /// Apply this gesture to the two screens.
    pub fn apply(&self, tasks: &mut TaskSession, notes: &mut NoteSession) {
        match self {
            Gesture::Add(text) => {
                tasks.set_input(text.clone());
                tasks.submit();
            }
            Gesture::Input(text) => tasks.set_input(text.clone()),
            Gesture::Submit => {
                tasks.submit();
            }
            Gesture::Edit(id) => {
                tasks.begin_edit(*id);
            }
            Gesture::CancelEdit => tasks.cancel_edit(),
            Gesture::Update(id, text) => {
                if tasks.begin_edit(*id) {
                    tasks.set_input(text.clone());
                    tasks.submit();
                }
            }
            Gesture::Delete(id) => {
                tasks.delete(*id);
            }
            Gesture::Toggle(id) => {
                tasks.toggle_completion(*id);
            }
            Gesture::Complete(id) => {
                tasks.set_completion(*id, true);
            }
            Gesture::Reopen(id) => {
                tasks.set_completion(*id, false);
            }
            Gesture::Select(id) => {
                tasks.toggle_selection(*id);
            }
            Gesture::EditSelected => {
                tasks.edit_selected();
            }
            Gesture::DeleteSelected => {
                tasks.delete_selected();
            }
            Gesture::CompleteSelected => {
                tasks.complete_selected();
            }
            Gesture::ReopenSelected => {
                tasks.reopen_selected();
            }
            Gesture::ClearSelection => tasks.clear_selection(),
            Gesture::Choose(id) => {
                tasks.choose(*id);
            }
            Gesture::Confirm(ConfirmChoice::Edit) => {
                tasks.confirm_edit();
            }
            Gesture::Confirm(ConfirmChoice::Delete) => {
                tasks.confirm_delete();
            }
            Gesture::Confirm(ConfirmChoice::Toggle) => {
                tasks.confirm_toggle_completion();
            }
            Gesture::Dismiss => tasks.cancel(),
            Gesture::Search(q) => tasks.set_query(q.clone()),
            Gesture::ClearSearch => tasks.clear_query(),
            Gesture::NoteAdd(text) => {
                notes.set_input(text.clone());
                notes.submit();
            }
            Gesture::NoteDelete(id) => {
                notes.delete(*id);
            }
            Gesture::NoteSearch(q) => notes.set_query(q.clone()),
            Gesture::NoteClearSearch => notes.clear_query(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_basic_script() {
        let src = "\
# groceries
add Buy milk

toggle 1
choose 1
confirm delete
search MILK
note add Remember the keys
";
        let gestures = parse_script(src).unwrap();
        assert_eq!(
            gestures,
            vec![
                Gesture::Add("Buy milk".into()),
                Gesture::Toggle(TaskId(1)),
                Gesture::Choose(TaskId(1)),
                Gesture::Confirm(ConfirmChoice::Delete),
                Gesture::Search("MILK".into()),
                Gesture::NoteAdd("Remember the keys".into()),
            ]
        );
    }

    #[test]
    fn test_text_keeps_inner_spacing() {
        assert_eq!(
            parse_line("add Buy  two  things", 1).unwrap(),
            Some(Gesture::Add("Buy  two  things".into()))
        );
        assert_eq!(
            parse_line("add    ", 1).unwrap(),
            Some(Gesture::Add("   ".into()))
        );
        assert_eq!(parse_line("add", 1).unwrap(), Some(Gesture::Add(String::new())));
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            parse_line("update 2 Walk the dog", 1).unwrap(),
            Some(Gesture::Update(TaskId(2), "Walk the dog".into()))
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let gestures = parse_script("add a\r\nsubmit\r\n").unwrap();
        assert_eq!(gestures, vec![Gesture::Add("a".into()), Gesture::Submit]);
    }

    #[test]
    fn test_unknown_command_reports_line() {
        let err = parse_script("add a\nfrobnicate 3\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unknown command \"frobnicate\"");
    }

    #[test]
    fn test_invalid_id() {
        let err = parse_script("toggle two").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidId { line: 1, .. }));
    }

    #[test]
    fn test_missing_id() {
        let err = parse_script("\n\ndelete").unwrap_err();
        assert!(matches!(err, ScriptError::MissingArgument { line: 3, .. }));
    }

    #[test]
    fn test_confirm_requires_choice() {
        assert!(parse_script("confirm maybe").is_err());
        assert_eq!(
            parse_line("confirm complete", 1).unwrap(),
            Some(Gesture::Confirm(ConfirmChoice::Toggle))
        );
    }

    #[test]
    fn test_note_subcommands() {
        assert_eq!(
            parse_line("note delete 4", 1).unwrap(),
            Some(Gesture::NoteDelete(NoteId(4)))
        );
        assert!(parse_line("note", 1).is_err());
        assert!(parse_line("note rename 1", 1).is_err());
    }

    #[test]
    fn test_apply_options_flow() {
        let mut tasks = TaskSession::default();
        let mut notes = NoteSession::default();
        let script = parse_script("add Buy milk\nchoose 1\nconfirm edit\ninput Buy bread\nsubmit\n")
            .unwrap();
        for g in &script {
            g.apply(&mut tasks, &mut notes);
        }
        assert_eq!(tasks.store().tasks()[0].text, "Buy bread");
        assert_eq!(tasks.store().len(), 1);
    }

    #[test]
    fn test_apply_update_unknown_id_is_noop() {
        let mut tasks = TaskSession::default();
        let mut notes = NoteSession::default();
        Gesture::Update(TaskId(5), "x".into()).apply(&mut tasks, &mut notes);
        assert!(tasks.store().is_empty());
        assert_eq!(tasks.input(), "");
    }
}
