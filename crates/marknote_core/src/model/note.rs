//! Note domain model: stored, input and view forms.
//!
//! # Responsibility
//! - `RawNote` is the durable representation referencing tags by id.
//! - `NoteData` is what create/edit forms submit.
//! - `Note` is the read-time join of a `RawNote` with resolved tags.
//!
//! # Invariants
//! - `RawNote::tag_ids` may contain duplicates and dangling ids.
//! - `Note` is never persisted.

use super::generate_id;
use super::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};

/// Stable identifier of a note.
pub type NoteId = String;

/// Stored form of a note.
///
/// Serialized with `tagIds` to match the storage wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    pub id: NoteId,
    pub title: String,
    /// Markdown body.
    pub markdown: String,
    /// Ordered tag references. Owned exclusively by the note registry.
    pub tag_ids: Vec<TagId>,
}

impl RawNote {
    /// Builds a stored note with a generated ID from form input.
    pub fn from_data(data: &NoteData) -> Self {
        Self::with_id(generate_id(), data)
    }

    /// Builds a stored note with a caller-provided ID from form input.
    pub fn with_id(id: impl Into<NoteId>, data: &NoteData) -> Self {
        Self {
            id: id.into(),
            title: data.title.clone(),
            markdown: data.markdown.clone(),
            tag_ids: data.tag_ids(),
        }
    }

    /// Replaces every field except `id` with the given form input.
    pub fn apply(&mut self, data: &NoteData) {
        self.title = data.title.clone();
        self.markdown = data.markdown.clone();
        self.tag_ids = data.tag_ids();
    }
}

/// Create/edit form payload.
///
/// No validation happens here: empty title and markdown are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteData {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl NoteData {
    pub fn new(title: impl Into<String>, markdown: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            title: title.into(),
            markdown: markdown.into(),
            tags,
        }
    }

    /// Projects the tag objects down to their identifiers, keeping order.
    pub fn tag_ids(&self) -> Vec<TagId> {
        self.tags.iter().map(|tag| tag.id.clone()).collect()
    }
}

/// View form of a note with tag ids resolved to tag objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl Note {
    /// Converts back into the form payload used by the edit view.
    pub fn to_data(&self) -> NoteData {
        NoteData::new(self.title.clone(), self.markdown.clone(), self.tags.clone())
    }
}
