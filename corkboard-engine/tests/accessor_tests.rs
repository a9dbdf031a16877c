use corkboard_engine::accessor;
use corkboard_model::{Note, NoteId};
use corkboard_store::MemoryNoteStore;
use pretty_assertions::assert_eq;

fn store_with_content(id: &str, content: &str) -> MemoryNoteStore {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new(id, "Note"));
    store.set_content(&NoteId::from(id), content);
    store
}

// ── Content ──────────────────────────────────────────────────────

#[tokio::test]
async fn content_fetches_through_the_store() {
    let store = store_with_content("n1", "<p>hello</p>");
    let note = Note::new("n1", "Note");
    assert_eq!(
        accessor::content(&store, &note).await.unwrap().as_deref(),
        Some("<p>hello</p>")
    );
}

#[tokio::test]
async fn content_absent_when_store_has_none() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "Note"));
    let note = Note::new("n1", "Note");
    assert_eq!(accessor::content(&store, &note).await.unwrap(), None);
}

// ── Content length ───────────────────────────────────────────────

#[tokio::test]
async fn snapshot_length_is_preferred() {
    let store = store_with_content("n1", "abc");
    let note = Note::new("n1", "Note").with_content_length(1000);
    assert_eq!(
        accessor::content_length(&store, &note).await.unwrap(),
        Some(1000)
    );
}

#[tokio::test]
async fn length_falls_back_to_fetched_content() {
    let store = store_with_content("n1", "abc");
    let note = Note::new("n1", "Note");
    assert_eq!(
        accessor::content_length(&store, &note).await.unwrap(),
        Some(3)
    );
}

#[tokio::test]
async fn empty_content_has_zero_length() {
    let store = store_with_content("n1", "");
    let note = Note::new("n1", "Note");
    assert_eq!(
        accessor::content_length(&store, &note).await.unwrap(),
        Some(0)
    );
}

#[tokio::test]
async fn length_absent_without_content() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "Note"));
    let note = Note::new("n1", "Note");
    assert_eq!(accessor::content_length(&store, &note).await.unwrap(), None);
}

// ── Dates ────────────────────────────────────────────────────────

#[tokio::test]
async fn dates_pass_through_the_store() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "Note"));
    store.set_dates(
        &NoteId::from("n1"),
        Some("2020-01-02 03:04:05.678Z"),
        Some("2020-02-03 04:05:06.789Z"),
    );
    let note = Note::new("n1", "Note");

    assert_eq!(
        accessor::date_created(&store, &note).await.unwrap().as_deref(),
        Some("2020-01-02 03:04:05.678Z")
    );
    assert_eq!(
        accessor::date_modified(&store, &note).await.unwrap().as_deref(),
        Some("2020-02-03 04:05:06.789Z")
    );
}

#[tokio::test]
async fn unsupported_creation_date_is_absent() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "Note"));
    store.set_dates(&NoteId::from("n1"), None, Some("2020-02-03 04:05:06.789Z"));
    let note = Note::new("n1", "Note");

    assert_eq!(accessor::date_created(&store, &note).await.unwrap(), None);
}

// ── Cover URLs ───────────────────────────────────────────────────

#[tokio::test]
async fn image_note_links_to_its_own_image() {
    let store = MemoryNoteStore::new();
    let note = Note::new("img1", "test/../image.png").with_kind("image");
    assert_eq!(
        accessor::cover_url(&store, &note).await.unwrap().as_deref(),
        Some("api/images/img1/test%2F..%2Fimage.png")
    );
}

#[tokio::test]
async fn text_note_without_content_has_no_cover() {
    let mut store = MemoryNoteStore::new();
    store.insert(Note::new("n1", "Note"));
    let note = Note::new("n1", "Note");
    assert_eq!(accessor::cover_url(&store, &note).await.unwrap(), None);
}

#[tokio::test]
async fn text_note_without_image_has_no_cover() {
    let store = store_with_content("n1", "<p></p>");
    let note = Note::new("n1", "Note");
    assert_eq!(accessor::cover_url(&store, &note).await.unwrap(), None);
}

#[tokio::test]
async fn first_hosted_image_becomes_the_cover() {
    let store = store_with_content(
        "n1",
        "<p>text</p>\n<img src=\"ignore.png\">\n<img src=\"api/images/id/cover.png\">",
    );
    let note = Note::new("n1", "Note");
    assert_eq!(
        accessor::cover_url(&store, &note).await.unwrap().as_deref(),
        Some("api/images/id/cover.png")
    );
}

#[tokio::test]
async fn image_attachments_are_recognized() {
    let store = store_with_content("n1", "<img src=\"api/attachments/id/image/cover.png\">");
    let note = Note::new("n1", "Note");
    assert_eq!(
        accessor::cover_url(&store, &note).await.unwrap().as_deref(),
        Some("api/attachments/id/image/cover.png")
    );
}

#[tokio::test]
async fn other_note_kinds_have_no_cover() {
    let store = store_with_content("n1", "<img src=\"api/images/id/cover.png\">");
    let note = Note::new("n1", "Note").with_kind("code");
    assert_eq!(accessor::cover_url(&store, &note).await.unwrap(), None);
}
