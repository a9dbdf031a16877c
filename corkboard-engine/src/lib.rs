//! The corkboard collection engine.
//!
//! The algorithmic core behind board, gallery, and table views of a note
//! collection:
//!
//! - [`accessor`] — uniform read access to a note's lazily-fetched properties
//! - [`path`] — dotted attribute-path resolution (`assignee.team`, `$title`)
//! - [`sortable`] — canonical comparison strings with collation normalization
//! - [`sort`] — stable multi-key, numeric-aware note ordering
//! - [`group`] — partitioning notes into named groups with multiplicity
//!
//! All engines are pure functions over immutable note snapshots plus an
//! injected [`corkboard_store::NoteStore`] handle; nothing persists between
//! calls. Missing attributes, dangling relations, and malformed paths
//! degrade to empty results — only store failures abort a call.

pub mod accessor;
pub mod group;
pub mod path;
pub mod sort;
pub mod sortable;

pub use group::{group_by_path, group_notes};
pub use path::{first_resolved, first_value, resolve_path};
pub use sort::{SortKey, sort_notes};
pub use sortable::{SORTABLE_TITLE_LABEL, sortable_group_name, sortable_title, sortable_value};
