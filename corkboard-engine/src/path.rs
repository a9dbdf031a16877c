//! Attribute-path resolution.
//!
//! A path selects either a `$`-prefixed built-in property (`$title`,
//! `$contentSize`, ...) or one or two hops of attribute traversal
//! (`status`, `assignee.team`). Resolution never fails on data problems:
//! unknown names, dangling relations, and malformed paths all degrade to
//! an empty result. Only store failures propagate.

use crate::accessor;
use corkboard_model::{Attribute, Note, NoteId, ResolvedValue};
use corkboard_store::{NoteStore, StoreResult};
use futures::future::try_join_all;

/// Resolves a dotted attribute path against a note.
///
/// Multi-valued attributes yield one entry per match, in note attribute
/// order, labels and relations interleaved. A two-segment path follows
/// relation attributes one hop and resolves the remainder against each
/// target in turn; label attributes sharing the name are excluded, and
/// targets missing from the store contribute nothing.
pub async fn resolve_path(
    store: &dyn NoteStore,
    note: &Note,
    path: &str,
) -> StoreResult<Vec<ResolvedValue>> {
    let Some((head, rest)) = path.split_once('.') else {
        return resolve_segment(store, note, path).await;
    };
    // Built-in properties never traverse; a trailing segment is ignored.
    if head.starts_with('$') {
        return resolve_segment(store, note, head).await;
    }

    let targets: Vec<&NoteId> = note
        .attributes_named(head)
        .filter_map(|a| match a {
            Attribute::Relation { target, .. } => Some(target),
            Attribute::Label { .. } => None,
        })
        .collect();
    let fetched = try_join_all(targets.iter().map(|id| store.note(id))).await?;
    let resolved = try_join_all(
        fetched
            .iter()
            .flatten()
            .map(|target| resolve_segment(store, target, rest)),
    )
    .await?;
    Ok(resolved.into_iter().flatten().collect())
}

/// The first value the path resolves to, if any.
pub async fn first_resolved(
    store: &dyn NoteStore,
    note: &Note,
    path: &str,
) -> StoreResult<Option<ResolvedValue>> {
    Ok(resolve_path(store, note, path).await?.into_iter().next())
}

/// The first value the path resolves to, as a string; empty if none.
pub async fn first_value(store: &dyn NoteStore, note: &Note, path: &str) -> StoreResult<String> {
    Ok(first_resolved(store, note, path)
        .await?
        .map(ResolvedValue::into_value)
        .unwrap_or_default())
}

/// Resolves a single segment (a built-in token or an attribute name)
/// against one note.
async fn resolve_segment(
    store: &dyn NoteStore,
    note: &Note,
    segment: &str,
) -> StoreResult<Vec<ResolvedValue>> {
    if segment.is_empty() {
        return Ok(Vec::new());
    }
    if segment.starts_with('$') {
        return resolve_builtin(store, note, segment).await;
    }
    Ok(note
        .attributes_named(segment)
        .map(|a| match a {
            Attribute::Label { value, .. } => ResolvedValue::Label(value.clone()),
            Attribute::Relation { target, .. } => ResolvedValue::Relation(target.to_string()),
        })
        .collect())
}

/// Resolves a `$`-prefixed built-in property token. Unrecognized tokens
/// and absent values resolve empty rather than erroring.
async fn resolve_builtin(
    store: &dyn NoteStore,
    note: &Note,
    token: &str,
) -> StoreResult<Vec<ResolvedValue>> {
    let value = match token {
        "$id" | "$noteId" => Some(note.id.to_string()),
        "$type" => Some(note.kind.clone()),
        "$mime" => Some(note.mime.clone()),
        "$title" => Some(note.title.clone()),
        "$contentSize" => accessor::content_length(store, note)
            .await?
            .map(|length| length.to_string()),
        "$dateCreated" => accessor::date_created(store, note).await?,
        "$dateModified" => accessor::date_modified(store, note).await?,
        _ => None,
    };
    Ok(value.map(ResolvedValue::Label).into_iter().collect())
}
