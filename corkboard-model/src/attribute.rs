//! Note attributes — the labeled values and relations attached to a note.

use crate::NoteId;
use serde::{Deserialize, Serialize};

/// A single attribute attached to a note.
///
/// Attributes are multi-valued: a note may carry any number of attributes
/// sharing one name, and their order on the note is meaningful. The JSON
/// shape matches the host's attribute records:
/// `{"type":"label","name":"status","value":"open"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Attribute {
    /// A literal-valued attribute.
    Label { name: String, value: String },
    /// A reference to another note by identifier. The target may not
    /// resolve to an existing note.
    Relation {
        name: String,
        #[serde(rename = "value")]
        target: NoteId,
    },
}

impl Attribute {
    /// Shorthand for a label attribute.
    pub fn label(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Label {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a relation attribute.
    pub fn relation(name: impl Into<String>, target: impl Into<NoteId>) -> Self {
        Self::Relation {
            name: name.into(),
            target: target.into(),
        }
    }

    /// The attribute's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Label { name, .. } | Self::Relation { name, .. } => name,
        }
    }

    /// The attribute's raw value: the literal for a label, the target
    /// identifier for a relation.
    pub fn value(&self) -> &str {
        match self {
            Self::Label { value, .. } => value,
            Self::Relation { target, .. } => target.as_str(),
        }
    }

    /// Returns whether this is a label attribute.
    pub fn is_label(&self) -> bool {
        matches!(self, Self::Label { .. })
    }

    /// Returns whether this is a relation attribute.
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation { .. })
    }
}

/// A value produced by resolving an attribute path against a note,
/// tagged with the kind of attribute it came from.
///
/// The kind drives the value-vs-title fallback when building sortable
/// strings: a relation's raw value is a note identifier, which is only
/// displayed when the target cannot be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    /// Came from a label attribute or a built-in property.
    Label(String),
    /// Came from a relation attribute; the string is the target note's
    /// identifier.
    Relation(String),
}

impl ResolvedValue {
    /// The resolved string, regardless of kind.
    pub fn value(&self) -> &str {
        match self {
            Self::Label(value) | Self::Relation(value) => value,
        }
    }

    /// Consumes the resolved value, returning the string.
    pub fn into_value(self) -> String {
        match self {
            Self::Label(value) | Self::Relation(value) => value,
        }
    }

    /// Returns whether the value came from a relation attribute.
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation(_))
    }
}
