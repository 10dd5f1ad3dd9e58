use tracing::debug;

use crate::model::task::{Task, TaskId};
use crate::ops::task_store::{StoreError, TaskStore};

/// Where the to-do screen is in its single-item interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A row was tapped and its options are showing
    ItemChosen(TaskId),
    /// The input buffer holds this task's text; the next submit updates it
    Editing(TaskId),
}

/// Interaction state of the to-do screen wrapped around its [`TaskStore`].
///
/// The session owns the store exclusively. Every gesture from the rendering
/// layer goes through here so the edit target, the options modal and the
/// search query stay consistent with the list.
#[derive(Debug, Clone, Default)]
pub struct TaskSession {
    store: TaskStore,
    input: String,
    editing: Option<TaskId>,
    chosen: Option<TaskId>,
    query: String,
    status: Option<String>,
}

impl TaskSession {
    pub fn new(store: TaskStore) -> Self {
        TaskSession {
            store,
            ..TaskSession::default()
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn chosen(&self) -> Option<TaskId> {
        self.chosen
    }

    pub fn phase(&self) -> Phase {
        match (self.chosen, self.editing) {
            (Some(id), _) => Phase::ItemChosen(id),
            (None, Some(id)) => Phase::Editing(id),
            (None, None) => Phase::Idle,
        }
    }

    // -----------------------------------------------------------------------
    // Input buffer and add/update routing
    // -----------------------------------------------------------------------

    /// Replace the input buffer with the full current text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Commit the input buffer: update the edit target if editing, add otherwise.
    ///
    /// Returns the affected task id. Empty text leaves everything as it was,
    /// including the buffer.
    pub fn submit(&mut self) -> Option<TaskId> {
        self.status = None;
        let result = match self.editing {
            Some(id) => self.store.update_task(id, &self.input).map(|()| id),
            None => self.store.add_task(&self.input),
        };
        match result {
            Ok(id) => {
                self.input.clear();
                self.editing = None;
                Some(id)
            }
            Err(StoreError::TaskNotFound(id)) => {
                // Target vanished under us; keep the text so it can be re-added.
                debug!(task = %id, "edit target gone");
                self.editing = None;
                None
            }
            Err(StoreError::EmptyText) => None,
        }
    }

    /// Load a task's text into the buffer and route the next submit to it.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.store.get(id) else {
            return false;
        };
        self.input = task.text.clone();
        self.editing = Some(id);
        self.status = None;
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.input.clear();
    }

    // -----------------------------------------------------------------------
    // Options modal: Idle -> ItemChosen -> Idle
    // -----------------------------------------------------------------------

    /// Open the options for a task. Unknown ids are ignored.
    pub fn choose(&mut self, id: TaskId) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.chosen = Some(id);
        true
    }

    /// Edit the chosen task (ItemChosen -> Editing).
    pub fn confirm_edit(&mut self) -> bool {
        match self.chosen.take() {
            Some(id) => self.begin_edit(id),
            None => false,
        }
    }

    pub fn confirm_delete(&mut self) -> Option<Task> {
        let id = self.chosen.take()?;
        self.delete(id)
    }

    /// Complete or unfinish the chosen task. Returns the new completion value.
    pub fn confirm_toggle_completion(&mut self) -> Option<bool> {
        let id = self.chosen.take()?;
        self.toggle_completion(id)
    }

    /// Close the options without touching the list.
    pub fn cancel(&mut self) {
        self.chosen = None;
    }

    // -----------------------------------------------------------------------
    // Direct row actions
    // -----------------------------------------------------------------------

    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        self.status = None;
        let removed = self.store.delete_task(id)?;
        self.forget(id);
        Some(removed)
    }

    pub fn toggle_completion(&mut self, id: TaskId) -> Option<bool> {
        self.status = None;
        self.store.toggle_completion(id)
    }

    pub fn set_completion(&mut self, id: TaskId, value: bool) -> Option<()> {
        self.status = None;
        self.store.set_completion(id, value)
    }

    /// Drop any edit or modal state that points at a removed task.
    fn forget(&mut self, id: TaskId) {
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        if self.chosen == Some(id) {
            self.chosen = None;
        }
    }

    // -----------------------------------------------------------------------
    // Selection actions
    // -----------------------------------------------------------------------

    pub fn toggle_selection(&mut self, id: TaskId) -> Option<bool> {
        self.status = None;
        self.store.toggle_selection(id)
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    /// Edit the selected task. Only allowed with exactly one selected;
    /// otherwise nothing changes and a hint is left in the status line.
    pub fn edit_selected(&mut self) -> bool {
        match self.store.single_selected().map(|t| t.id) {
            Some(id) => self.begin_edit(id),
            None => {
                self.status = Some("Select exactly one task to edit".to_string());
                false
            }
        }
    }

    pub fn delete_selected(&mut self) -> Vec<Task> {
        self.status = None;
        let removed = self.store.delete_selected();
        for task in &removed {
            self.forget(task.id);
        }
        removed
    }

    pub fn complete_selected(&mut self) -> usize {
        self.status = None;
        self.store.set_selected_completion(true)
    }

    pub fn reopen_selected(&mut self) -> usize {
        self.status = None;
        self.store.set_selected_completion(false)
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Tasks matching the current query, in list order
    pub fn visible(&self) -> Vec<&Task> {
        self.store.filter_by_search(&self.query)
    }

    /// Human-readable line for the view: an empty-search message takes
    /// priority over any transient hint.
    pub fn status_message(&self) -> Option<String> {
        if !self.query.is_empty() && self.visible().is_empty() {
            return Some(format!("No tasks match \"{}\"", self.query));
        }
        self.status.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session_with(texts: &[&str]) -> TaskSession {
        let mut store = TaskStore::default();
        for text in texts {
            store.add_task_with_date(text, "today".into()).unwrap();
        }
        TaskSession::new(store)
    }

    fn id_of(session: &TaskSession, text: &str) -> TaskId {
        session
            .store()
            .tasks()
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.id)
            .unwrap()
    }

    fn texts(session: &TaskSession) -> Vec<String> {
        session
            .store()
            .tasks()
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    // --- submit routing ---

    #[test]
    fn test_submit_adds_and_clears_input() {
        let mut s = TaskSession::default();
        s.set_input("Buy milk");
        let id = s.submit().unwrap();
        assert_eq!(s.input(), "");
        assert_eq!(s.store().get(id).unwrap().text, "Buy milk");
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_submit_empty_keeps_input() {
        let mut s = TaskSession::default();
        s.set_input("   ");
        assert!(s.submit().is_none());
        assert_eq!(s.input(), "   ");
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_edit_routes_submit_to_update() {
        let mut s = session_with(&["Buy milk", "Walk dog"]);
        let id = id_of(&s, "Buy milk");
        assert!(s.begin_edit(id));
        assert_eq!(s.input(), "Buy milk");
        assert_eq!(s.phase(), Phase::Editing(id));

        s.set_input("Buy oat milk");
        assert_eq!(s.submit(), Some(id));
        assert_eq!(texts(&s), vec!["Buy oat milk", "Walk dog"]);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.input(), "");
    }

    #[test]
    fn test_edit_with_empty_text_stays_editing() {
        let mut s = session_with(&["Buy milk"]);
        let id = id_of(&s, "Buy milk");
        s.begin_edit(id);
        s.set_input("");
        assert!(s.submit().is_none());
        assert_eq!(s.phase(), Phase::Editing(id));
        assert_eq!(texts(&s), vec!["Buy milk"]);
    }

    #[test]
    fn test_edit_preserves_completion() {
        let mut s = session_with(&["Buy milk"]);
        let id = id_of(&s, "Buy milk");
        s.toggle_completion(id);
        s.begin_edit(id);
        s.set_input("Buy bread");
        s.submit();
        assert!(s.store().get(id).unwrap().completed);
    }

    #[test]
    fn test_cancel_edit() {
        let mut s = session_with(&["Buy milk"]);
        s.begin_edit(id_of(&s, "Buy milk"));
        s.cancel_edit();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.input(), "");
        s.set_input("New");
        s.submit();
        assert_eq!(texts(&s), vec!["Buy milk", "New"]);
    }

    #[test]
    fn test_deleting_edit_target_leaves_editing() {
        let mut s = session_with(&["a", "b"]);
        let a = id_of(&s, "a");
        s.begin_edit(a);
        s.delete(a);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.input(), "");
    }

    #[test]
    fn test_edit_by_identity_under_filter() {
        let mut s = session_with(&["Buy groceries", "Finish homework", "Buy milk"]);
        s.set_query("milk");
        let target = s.visible()[0].id;
        s.begin_edit(target);
        s.set_input("Buy oat milk");
        s.submit();
        assert_eq!(
            texts(&s),
            vec!["Buy groceries", "Finish homework", "Buy oat milk"]
        );
    }

    // --- options modal ---

    #[test]
    fn test_choose_then_cancel() {
        let mut s = session_with(&["a"]);
        let id = id_of(&s, "a");
        assert!(s.choose(id));
        assert_eq!(s.phase(), Phase::ItemChosen(id));
        s.cancel();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(texts(&s), vec!["a"]);
    }

    #[test]
    fn test_choose_unknown_is_ignored() {
        let mut s = session_with(&["a"]);
        assert!(!s.choose(TaskId(77)));
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_confirm_delete() {
        let mut s = session_with(&["a", "b"]);
        let id = id_of(&s, "a");
        s.choose(id);
        assert_eq!(s.confirm_delete().unwrap().text, "a");
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(texts(&s), vec!["b"]);
    }

    #[test]
    fn test_confirm_toggle_completion() {
        let mut s = session_with(&["a"]);
        let id = id_of(&s, "a");
        s.choose(id);
        assert_eq!(s.confirm_toggle_completion(), Some(true));
        assert_eq!(s.phase(), Phase::Idle);
        s.choose(id);
        assert_eq!(s.confirm_toggle_completion(), Some(false));
    }

    #[test]
    fn test_confirm_edit_enters_editing() {
        let mut s = session_with(&["a"]);
        let id = id_of(&s, "a");
        s.choose(id);
        assert!(s.confirm_edit());
        assert_eq!(s.phase(), Phase::Editing(id));
        assert_eq!(s.input(), "a");
    }

    #[test]
    fn test_confirm_without_choice_is_noop() {
        let mut s = session_with(&["a"]);
        assert!(!s.confirm_edit());
        assert!(s.confirm_delete().is_none());
        assert!(s.confirm_toggle_completion().is_none());
        assert_eq!(texts(&s), vec!["a"]);
    }

    // --- selection ---

    #[test]
    fn test_edit_selected_requires_exactly_one() {
        let mut s = session_with(&["a", "b"]);
        let a = id_of(&s, "a");
        let b = id_of(&s, "b");

        assert!(!s.edit_selected());
        assert_eq!(
            s.status_message().as_deref(),
            Some("Select exactly one task to edit")
        );

        s.toggle_selection(a);
        s.toggle_selection(b);
        assert!(!s.edit_selected());
        assert_eq!(s.phase(), Phase::Idle);

        s.toggle_selection(b);
        assert!(s.edit_selected());
        assert_eq!(s.phase(), Phase::Editing(a));
        assert_eq!(s.status_message(), None);
    }

    #[test]
    fn test_delete_selected_clears_edit() {
        let mut s = session_with(&["a", "b", "c"]);
        let b = id_of(&s, "b");
        s.toggle_selection(b);
        s.edit_selected();
        let removed = s.delete_selected();
        assert_eq!(removed.len(), 1);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(texts(&s), vec!["a", "c"]);
    }

    #[test]
    fn test_complete_and_reopen_selected() {
        let mut s = session_with(&["a", "b"]);
        s.toggle_selection(id_of(&s, "a"));
        assert_eq!(s.complete_selected(), 1);
        assert!(s.store().tasks()[0].completed);
        assert!(!s.store().tasks()[1].completed);
        assert_eq!(s.reopen_selected(), 1);
        assert!(!s.store().tasks()[0].completed);
    }

    // --- search ---

    #[test]
    fn test_no_match_message() {
        let mut s = session_with(&["Buy milk"]);
        s.set_query("laundry");
        assert!(s.visible().is_empty());
        assert_eq!(
            s.status_message().as_deref(),
            Some("No tasks match \"laundry\"")
        );
        s.clear_query();
        assert_eq!(s.visible().len(), 1);
        assert_eq!(s.status_message(), None);
    }

    #[test]
    fn test_scenario_from_sample_list() {
        let mut s = session_with(&["Buy groceries", "Finish homework"]);
        s.set_input("Read a book");
        s.submit();
        assert_eq!(s.store().len(), 3);

        s.set_query("homework");
        let visible: Vec<String> = s.visible().iter().map(|t| t.text.clone()).collect();
        assert_eq!(visible, vec!["Finish homework"]);

        let target = s.visible()[0].id;
        s.delete(target);
        assert!(s.visible().is_empty());
        assert_eq!(s.store().len(), 2);
    }
}
