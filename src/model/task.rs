use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a task within its store.
///
/// Ids come from a per-store counter starting at 1 and are never handed out
/// twice, so a deleted task's id stays dead for the life of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Display text, as typed (non-empty once trimmed)
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Transient UI flag marking the task as a target of the next bulk action
    #[serde(default)]
    pub selected: bool,
    /// Display string captured at creation; edits leave it alone
    pub date: String,
}

impl Task {
    pub fn new(id: TaskId, text: String, date: String) -> Self {
        Task {
            id,
            text,
            completed: false,
            selected: false,
            date,
        }
    }

    /// Label shown in the status tag next to the task
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}
