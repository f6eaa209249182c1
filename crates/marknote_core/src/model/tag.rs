//! Tag domain model.
//!
//! # Invariants
//! - `id` is immutable after creation; only `label` may change.
//! - Tags are flat: no parent/child relation exists.

use super::generate_id;
use serde::{Deserialize, Serialize};

/// Stable identifier of a tag.
///
/// Kept as a plain string so ids written by other clients survive decode.
pub type TagId = String;

/// Named label usable to categorize notes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    /// Display name.
    pub label: String,
}

impl Tag {
    /// Creates a tag with a generated stable ID.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(generate_id(), label)
    }

    /// Creates a tag with a caller-provided ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: impl Into<TagId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
