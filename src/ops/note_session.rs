use crate::model::note::{Note, NoteId};
use crate::ops::note_store::NoteStore;

/// Interaction state of the notes screen: input buffer and search bar.
#[derive(Debug, Clone, Default)]
pub struct NoteSession {
    store: NoteStore,
    input: String,
    query: String,
}

impl NoteSession {
    pub fn new(store: NoteStore) -> Self {
        NoteSession {
            store,
            ..NoteSession::default()
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Add the buffer as a note, clearing it on success.
    pub fn submit(&mut self) -> Option<NoteId> {
        let id = self.store.add_note(&self.input).ok()?;
        self.input.clear();
        Some(id)
    }

    pub fn delete(&mut self, id: NoteId) -> Option<Note> {
        self.store.delete_note(id)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn visible(&self) -> Vec<&Note> {
        self.store.filter_by_search(&self.query)
    }

    pub fn status_message(&self) -> Option<String> {
        if !self.query.is_empty() && self.visible().is_empty() {
            Some(format!("No notes match \"{}\"", self.query))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_adds_and_clears() {
        let mut s = NoteSession::default();
        s.set_input("Remember the keys");
        let id = s.submit().unwrap();
        assert_eq!(s.input(), "");
        assert_eq!(s.store().get(id).unwrap().text, "Remember the keys");
    }

    #[test]
    fn test_submit_empty_keeps_buffer() {
        let mut s = NoteSession::default();
        s.set_input(" ");
        assert!(s.submit().is_none());
        assert_eq!(s.input(), " ");
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_delete_under_filter() {
        let mut s = NoteSession::default();
        s.set_input("alpha");
        s.submit();
        s.set_input("beta");
        s.submit();
        s.set_query("BET");
        let target = s.visible()[0].id;
        s.delete(target).unwrap();
        s.clear_query();
        let left: Vec<&str> = s.visible().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(left, vec!["alpha"]);
    }

    #[test]
    fn test_no_match_message() {
        let mut s = NoteSession::default();
        s.set_query("x");
        assert_eq!(s.status_message().as_deref(), Some("No notes match \"x\""));
    }
}
