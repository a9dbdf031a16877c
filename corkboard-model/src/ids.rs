//! Identifier types for corkboard.
//!
//! Host note identifiers are opaque strings assigned by the note store.
//! The newtype keeps them from mixing with titles, paths, and other
//! string-typed data flowing through the engines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a note, as assigned by the host note store.
///
/// A relation attribute may carry an identifier that no longer resolves
/// to an existing note; the type makes no validity guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Creates a note ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
