//! The note store trait.

use crate::StoreResult;
use async_trait::async_trait;
use corkboard_model::{Note, NoteId};
use std::sync::Arc;

/// Read-only asynchronous access to the host's notes.
///
/// All methods may suspend on I/O. Absence is a valid result everywhere:
/// a missing note, missing content, or an unsupported creation date is
/// reported as `None`, never as an error. Errors are reserved for the
/// backend itself failing.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Fetches the note with the given identifier.
    async fn note(&self, id: &NoteId) -> StoreResult<Option<Arc<Note>>>;

    /// Fetches a note's content. `None` when the note has no content.
    async fn content(&self, id: &NoteId) -> StoreResult<Option<String>>;

    /// Fetches a note's creation date as an ISO-8601-like string.
    /// `None` when the host representation does not record one.
    async fn date_created(&self, id: &NoteId) -> StoreResult<Option<String>>;

    /// Fetches a note's last modification date as an ISO-8601-like string.
    async fn date_modified(&self, id: &NoteId) -> StoreResult<Option<String>>;
}
