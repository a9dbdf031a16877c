//! In-memory note store for tests and embedders without a host backend.

use crate::{NoteStore, StoreResult};
use async_trait::async_trait;
use corkboard_model::{Note, NoteId};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug)]
struct Entry {
    note: Arc<Note>,
    content: Option<String>,
    date_created: Option<String>,
    date_modified: Option<String>,
}

/// A [`NoteStore`] backed by a `HashMap`.
///
/// Build it up front, then hand the engines a `&dyn NoteStore`. Notes are
/// stored as immutable snapshots; replacing a note replaces its content
/// and dates as well.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    entries: HashMap<NoteId, Entry>,
}

impl MemoryNoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note. Replaces any previous note with the same identifier.
    pub fn insert(&mut self, note: Note) {
        self.entries.insert(
            note.id.clone(),
            Entry {
                note: Arc::new(note),
                content: None,
                date_created: None,
                date_modified: None,
            },
        );
    }

    /// Adds every note in the iterator.
    pub fn insert_all(&mut self, notes: impl IntoIterator<Item = Note>) {
        for note in notes {
            self.insert(note);
        }
    }

    /// Sets a note's content. No effect when the note is absent.
    pub fn set_content(&mut self, id: &NoteId, content: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.content = Some(content.into());
        }
    }

    /// Sets a note's creation and modification dates. `None` models a
    /// host representation without support for that date.
    pub fn set_dates(&mut self, id: &NoteId, created: Option<&str>, modified: Option<&str>) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.date_created = created.map(str::to_string);
            entry.date_modified = modified.map(str::to_string);
        }
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn note(&self, id: &NoteId) -> StoreResult<Option<Arc<Note>>> {
        Ok(self.entries.get(id).map(|e| Arc::clone(&e.note)))
    }

    async fn content(&self, id: &NoteId) -> StoreResult<Option<String>> {
        Ok(self.entries.get(id).and_then(|e| e.content.clone()))
    }

    async fn date_created(&self, id: &NoteId) -> StoreResult<Option<String>> {
        Ok(self.entries.get(id).and_then(|e| e.date_created.clone()))
    }

    async fn date_modified(&self, id: &NoteId) -> StoreResult<Option<String>> {
        Ok(self.entries.get(id).and_then(|e| e.date_modified.clone()))
    }
}
