//! Partitioning notes into named groups by a resolved attribute path.

use crate::path;
use corkboard_model::{Group, Note, NoteId, ResolvedValue};
use corkboard_store::{NoteStore, StoreResult};
use futures::future::try_join_all;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Extracts the attribute path from a group-by specification, dropping
/// any trailing display options (`"assignee,badge"` selects `assignee`).
pub fn group_by_path(spec: &str) -> &str {
    spec.split_once(',').map_or(spec, |(p, _)| p).trim()
}

/// Partitions notes into groups keyed by the values the path resolves to.
///
/// A note joins one group per distinct resolved value — duplicates within
/// one note collapse — and notes resolving nothing land in a single
/// "no value" bucket. Groups appear in first-encounter order with the
/// "no value" bucket always last; members keep their input order.
pub async fn group_notes(
    store: &dyn NoteStore,
    notes: &[Arc<Note>],
    path: &str,
) -> StoreResult<Vec<Group>> {
    debug!(notes = notes.len(), path, "grouping notes");

    // Resolve every note, then fetch every distinct relation target, all
    // before the first grouping decision; partial results are never used.
    let resolutions =
        try_join_all(notes.iter().map(|note| path::resolve_path(store, note, path))).await?;

    let mut wanted: Vec<String> = Vec::new();
    let mut distinct: HashSet<&str> = HashSet::new();
    for value in resolutions.iter().flatten() {
        if let ResolvedValue::Relation(id) = value {
            if distinct.insert(id.as_str()) {
                wanted.push(id.clone());
            }
        }
    }
    let fetched = try_join_all(wanted.iter().map(|id| {
        let target = NoteId::from(id.as_str());
        async move { store.note(&target).await }
    }))
    .await?;
    let targets: HashMap<&str, Option<Arc<Note>>> =
        wanted.iter().map(String::as_str).zip(fetched).collect();

    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut ungrouped: Vec<Arc<Note>> = Vec::new();

    for (note, resolved) in notes.iter().zip(&resolutions) {
        let mut joined: HashSet<&str> = HashSet::new();
        for value in resolved {
            let Some(identity) = group_identity(value) else {
                continue;
            };
            if !joined.insert(identity) {
                continue;
            }
            let slot = match index.get(identity) {
                Some(&slot) => slot,
                None => {
                    groups.push(new_group(value, identity, &targets));
                    index.insert(identity.to_string(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[slot].notes.push(Arc::clone(note));
        }
        if joined.is_empty() {
            ungrouped.push(Arc::clone(note));
        }
    }

    if !ungrouped.is_empty() {
        groups.push(Group {
            name: None,
            related: None,
            notes: ungrouped,
        });
    }
    Ok(groups)
}

/// Group identity of one resolved item: the trimmed literal for a label
/// (blank literals identify nothing), the raw target identifier for a
/// relation.
fn group_identity(value: &ResolvedValue) -> Option<&str> {
    match value {
        ResolvedValue::Label(literal) => {
            let trimmed = literal.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        ResolvedValue::Relation(id) => Some(id),
    }
}

/// Builds the group shell for a first-encountered identity.
fn new_group(
    value: &ResolvedValue,
    identity: &str,
    targets: &HashMap<&str, Option<Arc<Note>>>,
) -> Group {
    match value {
        ResolvedValue::Label(literal) => Group {
            name: Some(literal.clone()),
            related: None,
            notes: Vec::new(),
        },
        ResolvedValue::Relation(id) => match targets.get(identity).and_then(Option::as_ref) {
            Some(target) => Group {
                name: Some(target.title.clone()),
                related: Some(Arc::clone(target)),
                notes: Vec::new(),
            },
            None => Group {
                name: Some(id.clone()),
                related: None,
                notes: Vec::new(),
            },
        },
    }
}
