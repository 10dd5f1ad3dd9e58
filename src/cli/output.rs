use serde::Serialize;

use crate::model::note::{Note, NoteId};
use crate::model::task::{Task, TaskId};
use crate::ops::{NoteSession, Phase, TaskSession};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub selected: bool,
    pub status: &'static str,
    pub date: String,
}

#[derive(Serialize)]
pub struct NoteJson {
    pub id: NoteId,
    pub text: String,
}

#[derive(Serialize)]
pub struct TaskScreenJson {
    pub tasks: Vec<TaskJson>,
    /// Ids passing the current search, in list order
    pub visible: Vec<TaskId>,
    pub query: String,
    pub input: String,
    pub phase: PhaseJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct NoteScreenJson {
    pub notes: Vec<NoteJson>,
    pub visible: Vec<NoteId>,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct SessionJson {
    pub todo: TaskScreenJson,
    pub notes: NoteScreenJson,
}

#[derive(Serialize)]
#[serde(tag = "state", content = "task", rename_all = "snake_case")]
pub enum PhaseJson {
    Idle,
    ItemChosen(TaskId),
    Editing(TaskId),
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        text: task.text.clone(),
        completed: task.completed,
        selected: task.selected,
        status: task.status_label(),
        date: task.date.clone(),
    }
}

pub fn note_to_json(note: &Note) -> NoteJson {
    NoteJson {
        id: note.id,
        text: note.text.clone(),
    }
}

fn phase_to_json(phase: Phase) -> PhaseJson {
    match phase {
        Phase::Idle => PhaseJson::Idle,
        Phase::ItemChosen(id) => PhaseJson::ItemChosen(id),
        Phase::Editing(id) => PhaseJson::Editing(id),
    }
}

pub fn session_to_json(tasks: &TaskSession, notes: &NoteSession) -> SessionJson {
    SessionJson {
        todo: TaskScreenJson {
            tasks: tasks.store().tasks().iter().map(task_to_json).collect(),
            visible: tasks.visible().iter().map(|t| t.id).collect(),
            query: tasks.query().to_string(),
            input: tasks.input().to_string(),
            phase: phase_to_json(tasks.phase()),
            status: tasks.status_message(),
        },
        notes: NoteScreenJson {
            notes: notes.store().notes().iter().map(note_to_json).collect(),
            visible: notes.visible().iter().map(|n| n.id).collect(),
            query: notes.query().to_string(),
            status: notes.status_message(),
        },
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Format a task line: `[x] #3 Read a book  (Jul 19, 2023 at 6:00 PM)`
pub fn format_task_line(task: &Task) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    let mut line = format!("[{}] #{} {}", check, task.id, task.text);
    if !task.date.is_empty() {
        line.push_str(&format!("  ({})", task.date));
    }
    if task.selected {
        line.push_str("  *selected*");
    }
    line
}

pub fn format_note_line(note: &Note) -> String {
    format!("#{} {}", note.id, note.text)
}

/// Render both screens as plain text, visible rows only.
pub fn format_session(tasks: &TaskSession, notes: &NoteSession) -> String {
    let mut out = String::new();

    let visible = tasks.visible();
    if tasks.query().is_empty() {
        out.push_str(&format!("Tasks ({})\n", tasks.store().len()));
    } else {
        out.push_str(&format!(
            "Tasks ({} of {} matching \"{}\")\n",
            visible.len(),
            tasks.store().len(),
            tasks.query()
        ));
    }
    for task in &visible {
        out.push_str(&format!("  {}\n", format_task_line(task)));
    }
    match tasks.phase() {
        Phase::Idle => {}
        Phase::ItemChosen(id) => out.push_str(&format!("options open for #{}\n", id)),
        Phase::Editing(id) => out.push_str(&format!("editing #{}\n", id)),
    }
    if !tasks.input().is_empty() {
        out.push_str(&format!("input: {:?}\n", tasks.input()));
    }
    if let Some(msg) = tasks.status_message() {
        out.push_str(&format!("{}\n", msg));
    }

    let visible_notes = notes.visible();
    if !notes.store().is_empty() || !notes.query().is_empty() {
        out.push('\n');
        if notes.query().is_empty() {
            out.push_str(&format!("Notes ({})\n", notes.store().len()));
        } else {
            out.push_str(&format!(
                "Notes ({} of {} matching \"{}\")\n",
                visible_notes.len(),
                notes.store().len(),
                notes.query()
            ));
        }
        for note in &visible_notes {
            out.push_str(&format!("  {}\n", format_note_line(note)));
        }
        if let Some(msg) = notes.status_message() {
            out.push_str(&format!("{}\n", msg));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::TaskStore;
    use pretty_assertions::assert_eq;

    fn seeded() -> TaskSession {
        TaskSession::new(TaskStore::with_sample_tasks("%Y"))
    }

    #[test]
    fn test_format_task_line() {
        let s = seeded();
        let lines: Vec<String> = s.store().tasks().iter().map(format_task_line).collect();
        assert_eq!(
            lines,
            vec![
                "[ ] #1 Buy groceries  (Jul 20, 2023 at 9:00 AM)",
                "[ ] #2 Finish homework  (Jul 21, 2023 at 3:30 PM)",
                "[x] #3 Read a book  (Jul 19, 2023 at 6:00 PM)",
            ]
        );
    }

    #[test]
    fn test_format_session_with_search() {
        let mut s = seeded();
        s.set_query("homework");
        let notes = NoteSession::default();
        assert_eq!(
            format_session(&s, &notes),
            "Tasks (1 of 3 matching \"homework\")\n  [ ] #2 Finish homework  (Jul 21, 2023 at 3:30 PM)\n"
        );
    }

    #[test]
    fn test_format_session_no_match() {
        let mut s = seeded();
        s.set_query("zzz");
        let out = format_session(&s, &NoteSession::default());
        assert!(out.contains("No tasks match \"zzz\""));
    }

    #[test]
    fn test_json_phase_shape() {
        let mut s = seeded();
        s.choose(TaskId(2));
        let json = serde_json::to_value(session_to_json(&s, &NoteSession::default())).unwrap();
        assert_eq!(json["todo"]["phase"]["state"], "item_chosen");
        assert_eq!(json["todo"]["phase"]["task"], 2);
        assert_eq!(json["todo"]["tasks"][2]["status"], "Completed");
        assert_eq!(json["todo"]["visible"].as_array().unwrap().len(), 3);
        assert!(json["todo"].get("status").is_none());
    }

    #[test]
    fn test_json_idle_phase() {
        let s = seeded();
        let json = serde_json::to_value(session_to_json(&s, &NoteSession::default())).unwrap();
        assert_eq!(json["todo"]["phase"]["state"], "idle");
    }
}
