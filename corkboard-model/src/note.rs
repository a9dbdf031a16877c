//! The note snapshot consumed by the resolution and ordering engines.

use crate::{Attribute, NoteId};
use serde::{Deserialize, Serialize};

/// An immutable snapshot of a note pulled from the host store.
///
/// The snapshot carries everything the engines read synchronously: the
/// identity fields and the ordered attribute list. Content and timestamps
/// may require a separate fetch and are read through the store instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// The host note type, e.g. "text" or "image".
    #[serde(rename = "type")]
    pub kind: String,
    pub mime: String,
    /// Content length in bytes, when the host tracks it separately from
    /// the content itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_length: Option<u64>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Note {
    /// Creates a text note with the given identifier and title.
    pub fn new(id: impl Into<NoteId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: "text".to_string(),
            mime: "text/html".to_string(),
            content_length: None,
            attributes: Vec::new(),
        }
    }

    /// Sets the note type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    /// Sets the separately-tracked content length.
    #[must_use]
    pub fn with_content_length(mut self, length: u64) -> Self {
        self.content_length = Some(length);
        self
    }

    /// Replaces the attribute list.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Appends one attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// All attributes with the given name, in note order.
    pub fn attributes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Attribute> {
        self.attributes.iter().filter(move |a| a.name() == name)
    }

    /// The value of the first label attribute with the given name.
    /// Relations with that name are ignored.
    pub fn label_value(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Label { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }
}
