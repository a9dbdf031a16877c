use corkboard_model::{Note, NoteId};
use corkboard_store::{MemoryNoteStore, NoteStore};
use pretty_assertions::assert_eq;

fn store_with(notes: Vec<Note>) -> MemoryNoteStore {
    let mut store = MemoryNoteStore::new();
    store.insert_all(notes);
    store
}

// ── Note lookup ──────────────────────────────────────────────────

#[tokio::test]
async fn note_round_trips() {
    let store = store_with(vec![Note::new("n1", "First")]);
    let note = store.note(&NoteId::from("n1")).await.unwrap().unwrap();
    assert_eq!(note.title, "First");
}

#[tokio::test]
async fn missing_note_is_none() {
    let store = store_with(vec![]);
    assert!(store.note(&NoteId::from("ghost")).await.unwrap().is_none());
}

#[tokio::test]
async fn insert_replaces_existing() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "Old"));
    store.set_content(&NoteId::from("n1"), "stale content");
    store.insert(Note::new("n1", "New"));

    let note = store.note(&NoteId::from("n1")).await.unwrap().unwrap();
    assert_eq!(note.title, "New");
    assert_eq!(store.content(&NoteId::from("n1")).await.unwrap(), None);
    assert_eq!(store.len(), 1);
}

// ── Content ──────────────────────────────────────────────────────

#[tokio::test]
async fn content_absent_by_default() {
    let store = store_with(vec![Note::new("n1", "First")]);
    assert_eq!(store.content(&NoteId::from("n1")).await.unwrap(), None);
}

#[tokio::test]
async fn content_set_and_fetched() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "First"));
    store.set_content(&NoteId::from("n1"), "<p>hello</p>");

    assert_eq!(
        store.content(&NoteId::from("n1")).await.unwrap().as_deref(),
        Some("<p>hello</p>")
    );
}

#[tokio::test]
async fn content_for_missing_note_is_none() {
    let mut store = MemoryNoteStore::new();
    store.set_content(&NoteId::from("ghost"), "ignored");
    assert_eq!(store.content(&NoteId::from("ghost")).await.unwrap(), None);
}

// ── Dates ────────────────────────────────────────────────────────

#[tokio::test]
async fn dates_default_to_unsupported() {
    let store = store_with(vec![Note::new("n1", "First")]);
    assert_eq!(store.date_created(&NoteId::from("n1")).await.unwrap(), None);
    assert_eq!(store.date_modified(&NoteId::from("n1")).await.unwrap(), None);
}

#[tokio::test]
async fn dates_round_trip() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "First"));
    store.set_dates(
        &NoteId::from("n1"),
        Some("2020-01-02 03:04:05.678Z"),
        Some("2020-02-03 04:05:06.789Z"),
    );

    assert_eq!(
        store
            .date_created(&NoteId::from("n1"))
            .await
            .unwrap()
            .as_deref(),
        Some("2020-01-02 03:04:05.678Z")
    );
    assert_eq!(
        store
            .date_modified(&NoteId::from("n1"))
            .await
            .unwrap()
            .as_deref(),
        Some("2020-02-03 04:05:06.789Z")
    );
}

#[tokio::test]
async fn creation_date_may_be_unsupported_alone() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "First"));
    store.set_dates(&NoteId::from("n1"), None, Some("2020-02-03 04:05:06.789Z"));

    assert_eq!(store.date_created(&NoteId::from("n1")).await.unwrap(), None);
    assert!(
        store
            .date_modified(&NoteId::from("n1"))
            .await
            .unwrap()
            .is_some()
    );
}

// ── Bookkeeping ──────────────────────────────────────────────────

#[test]
fn len_and_is_empty() {
    let mut store = MemoryNoteStore::new();
    assert!(store.is_empty());

    store.insert(Note::new("n1", "First"));
    store.insert(Note::new("n2", "Second"));
    assert_eq!(store.len(), 2);
    assert!(!store.is_empty());
}
