//! Uniform read access to a note's lazily-fetched properties.
//!
//! The snapshot carries identity fields and attributes; content and
//! timestamps live behind the store. These helpers fold both sides into
//! one read surface and tolerate partial data throughout: a host that
//! does not record a creation date yields `None`, not an error.

use corkboard_model::Note;
use corkboard_store::{NoteStore, StoreResult};
use regex_lite::Regex;
use std::sync::LazyLock;

/// Fetches the note's content, if it has any.
pub async fn content(store: &dyn NoteStore, note: &Note) -> StoreResult<Option<String>> {
    store.content(&note.id).await
}

/// The note's content length in bytes.
///
/// Prefers the length tracked on the snapshot; falls back to fetching the
/// content and measuring it. Empty content yields `Some(0)`, absent
/// content `None`.
pub async fn content_length(store: &dyn NoteStore, note: &Note) -> StoreResult<Option<u64>> {
    if let Some(length) = note.content_length {
        return Ok(Some(length));
    }
    Ok(store.content(&note.id).await?.map(|c| c.len() as u64))
}

/// The note's creation date; `None` when the host does not record one.
pub async fn date_created(store: &dyn NoteStore, note: &Note) -> StoreResult<Option<String>> {
    store.date_created(&note.id).await
}

/// The note's last modification date.
pub async fn date_modified(store: &dyn NoteStore, note: &Note) -> StoreResult<Option<String>> {
    store.date_modified(&note.id).await
}

static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]*src="(api/images/[^"]+|api/attachments/[^"]+/image/[^"]+)""#)
        .expect("cover image pattern is valid")
});

/// URL of the note's cover image, if any.
///
/// An image note links straight to its own image; a text note uses the
/// first image or image attachment referenced by its content. Other note
/// types have no cover.
pub async fn cover_url(store: &dyn NoteStore, note: &Note) -> StoreResult<Option<String>> {
    match note.kind.as_str() {
        "image" => Ok(Some(format!(
            "api/images/{}/{}",
            note.id,
            urlencoding::encode(&note.title)
        ))),
        "text" => {
            let Some(content) = store.content(&note.id).await? else {
                return Ok(None);
            };
            Ok(IMG_SRC.captures(&content).map(|caps| caps[1].to_string()))
        }
        _ => Ok(None),
    }
}
