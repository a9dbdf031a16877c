//! Core note model for corkboard.
//!
//! Defines the types shared by every corkboard subsystem:
//! - [`Note`] — an immutable snapshot of a host note (id, title, type, attributes)
//! - [`Attribute`] — a label (literal value) or a relation (reference to another note)
//! - [`ResolvedValue`] — the output of attribute-path resolution
//! - [`Group`] — a partition of notes sharing a resolved value
//!
//! Notes are owned by the host store; the engines borrow snapshots for the
//! duration of one resolve/sort/group call and never mutate them.

mod attribute;
mod group;
mod ids;
mod note;

pub use attribute::{Attribute, ResolvedValue};
pub use group::Group;
pub use ids::NoteId;
pub use note::Note;
