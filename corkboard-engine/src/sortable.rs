//! Sortable value extraction and collation normalization.
//!
//! Every comparison string used by the sort and group engines goes
//! through the same normalization: outer whitespace trimmed, then
//! lowercased, inner whitespace untouched.

use crate::path;
use corkboard_model::{Group, Note, NoteId, ResolvedValue};
use corkboard_store::{NoteStore, StoreResult};

/// Label that overrides a note's title for comparison purposes.
pub const SORTABLE_TITLE_LABEL: &str = "sortableTitle";

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// The note's comparison string for the given path.
///
/// A label value compares as itself. A relation compares as its target's
/// sortable title, or as the raw identifier when the target is missing
/// from the store. Resolving nothing yields the empty string.
pub async fn sortable_value(store: &dyn NoteStore, note: &Note, path: &str) -> StoreResult<String> {
    match path::first_resolved(store, note, path).await? {
        None => Ok(String::new()),
        Some(ResolvedValue::Label(value)) => Ok(normalize(&value)),
        Some(ResolvedValue::Relation(id)) => match store.note(&NoteId::from(id.as_str())).await? {
            Some(target) => Ok(sortable_title(&target)),
            None => Ok(normalize(&id)),
        },
    }
}

/// The note's comparison title: its `sortableTitle` label when present,
/// else its title.
pub fn sortable_title(note: &Note) -> String {
    normalize(note.label_value(SORTABLE_TITLE_LABEL).unwrap_or(&note.title))
}

/// The group's comparison name: the related note's sortable title when
/// the group is backed by one, else the group's own name. The "no value"
/// bucket compares as the empty string.
pub fn sortable_group_name(group: &Group) -> String {
    match (&group.related, &group.name) {
        (Some(related), _) => sortable_title(related),
        (None, Some(name)) => normalize(name),
        (None, None) => String::new(),
    }
}
