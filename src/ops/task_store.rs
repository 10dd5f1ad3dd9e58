use chrono::Local;
use tracing::debug;

use crate::model::config::{AppConfig, DEFAULT_DATE_FORMAT};
use crate::model::task::{Task, TaskId};
use crate::ops::search::filter_by_query;

/// Why a store refused a mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("text is empty")]
    EmptyText,
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Tasks the to-do screen starts with when seeding is enabled
pub const SAMPLE_TASKS: [(&str, bool, &str); 3] = [
    ("Buy groceries", false, "Jul 20, 2023 at 9:00 AM"),
    ("Finish homework", false, "Jul 21, 2023 at 3:30 PM"),
    ("Read a book", true, "Jul 19, 2023 at 6:00 PM"),
];

/// The authoritative ordered list of tasks.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    date_format: String,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new(DEFAULT_DATE_FORMAT)
    }
}

impl TaskStore {
    /// `date_format` must be a valid chrono format string
    pub fn new(date_format: impl Into<String>) -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
            date_format: date_format.into(),
        }
    }

    /// A store pre-filled with [`SAMPLE_TASKS`]
    pub fn with_sample_tasks(date_format: impl Into<String>) -> Self {
        let mut store = TaskStore::new(date_format);
        for (text, completed, date) in SAMPLE_TASKS {
            if let Ok(id) = store.add_task_with_date(text, date.to_string()) {
                store.set_completion(id, completed);
            }
        }
        store
    }

    /// The store a screen starts with: the configured date format, seeded
    /// with the sample tasks when either `seed` or the config asks for it.
    pub fn from_config(config: &AppConfig, seed: bool) -> Self {
        let format = config.ui.date_format.clone();
        if seed || config.seed.sample_tasks {
            TaskStore::with_sample_tasks(format)
        } else {
            TaskStore::new(format)
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Append a task stamped with the current local time.
    pub fn add_task(&mut self, text: &str) -> Result<TaskId, StoreError> {
        let date = Local::now().format(&self.date_format).to_string();
        self.add_task_with_date(text, date)
    }

    /// Append a task with an explicit date string.
    pub fn add_task_with_date(&mut self, text: &str, date: String) -> Result<TaskId, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string(), date));
        debug!(task = %id, "task added");
        Ok(id)
    }

    /// Replace a task's text. Completion, selection, date and position are kept.
    pub fn update_task(&mut self, id: TaskId, text: &str) -> Result<(), StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let task = self.get_mut(id).ok_or(StoreError::TaskNotFound(id))?;
        task.text = text.to_string();
        debug!(task = %id, "task updated");
        Ok(())
    }

    /// Remove a task. Returns None when no task has this id.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        debug!(task = %id, "task deleted");
        Some(self.tasks.remove(idx))
    }

    /// Remove every selected task, returning them in list order.
    pub fn delete_selected(&mut self) -> Vec<Task> {
        let (removed, kept): (Vec<Task>, Vec<Task>) =
            self.tasks.drain(..).partition(|t| t.selected);
        self.tasks = kept;
        if !removed.is_empty() {
            debug!(count = removed.len(), "selected tasks deleted");
        }
        removed
    }

    // -----------------------------------------------------------------------
    // Completion
    // -----------------------------------------------------------------------

    /// Flip completion. Returns the new value.
    pub fn toggle_completion(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    pub fn set_completion(&mut self, id: TaskId, value: bool) -> Option<()> {
        self.get_mut(id)?.completed = value;
        Some(())
    }

    /// Set completion on every selected task. Returns how many were touched.
    pub fn set_selected_completion(&mut self, value: bool) -> usize {
        let mut count = 0;
        for task in self.tasks.iter_mut().filter(|t| t.selected) {
            task.completed = value;
            count += 1;
        }
        count
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Flip selection on one task. Returns the new value.
    pub fn toggle_selection(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.selected = !task.selected;
        Some(task.selected)
    }

    pub fn clear_selection(&mut self) {
        for task in &mut self.tasks {
            task.selected = false;
        }
    }

    pub fn selected(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.selected).collect()
    }

    /// The selected task, only when exactly one is selected
    pub fn single_selected(&self) -> Option<&Task> {
        let mut selected = self.tasks.iter().filter(|t| t.selected);
        let first = selected.next()?;
        match selected.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    pub fn filter_by_search(&self, query: &str) -> Vec<&Task> {
        filter_by_query(&self.tasks, query)
    }
}
