use tracing::debug;

use crate::model::note::{Note, NoteId};
use crate::ops::search::filter_by_query;
use crate::ops::task_store::StoreError;

/// Ordered list of free-text notes
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u64,
}

impl Default for NoteStore {
    fn default() -> Self {
        NoteStore {
            notes: Vec::new(),
            next_id: 1,
        }
    }
}

impl NoteStore {
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Append a note under a fresh id.
    pub fn add_note(&mut self, text: &str) -> Result<NoteId, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let id = NoteId(self.next_id);
        self.next_id += 1;
        self.notes.push(Note {
            id,
            text: text.to_string(),
        });
        debug!(note = %id, "note added");
        Ok(id)
    }

    /// Remove the note with this id; None if there is none.
    pub fn delete_note(&mut self, id: NoteId) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        debug!(note = %id, "note deleted");
        Some(self.notes.remove(idx))
    }

    pub fn filter_by_search(&self, query: &str) -> Vec<&Note> {
        filter_by_query(&self.notes, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_note() {
        let mut store = NoteStore::default();
        let id = store.add_note("Call the plumber").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().text, "Call the plumber");
    }

    #[test]
    fn test_add_empty_note_rejected() {
        let mut store = NoteStore::default();
        assert_eq!(store.add_note("  \n "), Err(StoreError::EmptyText));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_unique() {
        let mut store = NoteStore::default();
        let a = store.add_note("a").unwrap();
        store.delete_note(a).unwrap();
        let b = store.add_note("b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_delete_note() {
        let mut store = NoteStore::default();
        let a = store.add_note("a").unwrap();
        let b = store.add_note("b").unwrap();
        assert_eq!(store.delete_note(a).unwrap().text, "a");
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].id, b);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = NoteStore::default();
        store.add_note("a").unwrap();
        assert!(store.delete_note(NoteId(7)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_filter_by_search() {
        let mut store = NoteStore::default();
        store.add_note("Shopping list").unwrap();
        store.add_note("Meeting notes").unwrap();
        let hits = store.filter_by_search("NOTES");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Meeting notes");
        assert_eq!(store.filter_by_search("").len(), 2);
    }
}
