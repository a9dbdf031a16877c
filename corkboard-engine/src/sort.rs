//! Stable multi-key note ordering.
//!
//! Comparison strings for every (note, key) pair are computed up front,
//! then a single stable sort runs over the precomputed keys. Per key,
//! notes with no value form a distinct lowest stratum that the sort
//! direction does not reverse; non-empty values compare numerically when
//! both sides parse as numbers, lexically otherwise.

use crate::sortable;
use corkboard_model::Note;
use corkboard_store::{NoteStore, StoreResult};
use futures::future::try_join_all;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// One sort criterion: an attribute path and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub path: String,
    pub descending: bool,
}

impl SortKey {
    /// Ascending sort on the given path.
    pub fn ascending(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            descending: false,
        }
    }

    /// Descending sort on the given path.
    pub fn descending(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            descending: true,
        }
    }

    /// Parses a single key specification: an attribute path with an
    /// optional leading `-` for descending order. Blank input is `None`.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        let (path, descending) = match spec.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (spec, false),
        };
        if path.is_empty() {
            return None;
        }
        Some(Self {
            path: path.to_string(),
            descending,
        })
    }

    /// Parses a comma-separated key list such as `"priority,-dueDate"`.
    /// Blank entries are skipped.
    pub fn parse_list(spec: &str) -> Vec<Self> {
        spec.split(',').filter_map(Self::parse).collect()
    }
}

struct Decorated {
    note: Arc<Note>,
    keys: Vec<String>,
    title: String,
}

/// Stably sorts notes in place by the given keys.
///
/// An empty key list sorts by title alone. Each key's comparison string
/// is computed once per note before any comparison happens; after all
/// keys compare equal, the normalized title breaks ties ascending, and
/// fully-equal notes keep their input order.
pub async fn sort_notes(
    store: &dyn NoteStore,
    notes: &mut Vec<Arc<Note>>,
    keys: &[SortKey],
) -> StoreResult<()> {
    debug!(notes = notes.len(), keys = keys.len(), "sorting notes");

    let mut decorated = try_join_all(notes.iter().map(|note| decorate(store, note, keys))).await?;
    decorated.sort_by(|a, b| {
        for (i, key) in keys.iter().enumerate() {
            let ordering = compare_key(&a.keys[i], &b.keys[i], key.descending);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        a.title.cmp(&b.title)
    });
    *notes = decorated.into_iter().map(|d| d.note).collect();
    Ok(())
}

/// Computes every comparison string for one note.
async fn decorate(
    store: &dyn NoteStore,
    note: &Arc<Note>,
    keys: &[SortKey],
) -> StoreResult<Decorated> {
    let mut computed = Vec::with_capacity(keys.len());
    for key in keys {
        computed.push(sortable::sortable_value(store, note, &key.path).await?);
    }
    Ok(Decorated {
        note: Arc::clone(note),
        keys: computed,
        title: sortable::sortable_title(note),
    })
}

/// Compares two precomputed key strings. Empty strings sort first
/// regardless of direction; `descending` reverses only the ordering of
/// two non-empty values.
fn compare_key(a: &str, b: &str, descending: bool) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            let ordering = compare_values(a, b);
            if descending { ordering.reverse() } else { ordering }
        }
    }
}

/// Numeric comparison when both sides parse fully as numeric literals,
/// lexical comparison otherwise. Decided per pair, not per path: one
/// path's values may mix numbers and text across notes.
fn compare_values(a: &str, b: &str) -> Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Parses an integer or decimal literal with an optional leading minus.
/// Exponents, infinities, and anything else are rejected.
fn parse_numeric(value: &str) -> Option<f64> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || digits == "." {
        return None;
    }
    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    value.parse().ok()
}
