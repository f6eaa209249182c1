//! Tag registry.
//!
//! # Invariants
//! - Deleting a tag never cascades to notes referencing it.
//! - Insertion order is preserved; the join view depends on it.

use crate::model::tag::{Tag, TagId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// Creates a tag with a fresh id and appends it.
    pub fn add_tag(&mut self, label: impl Into<String>) -> Tag {
        let tag = Tag::new(label);
        self.tags.push(tag.clone());
        tag
    }

    /// Appends a tag whose id was minted by the caller.
    pub fn insert_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Replaces the label of the tag matching `id`.
    ///
    /// Returns `false` and leaves the collection unchanged when not found.
    pub fn update_tag(&mut self, id: &str, label: impl Into<String>) -> bool {
        match self.tags.iter_mut().find(|tag| tag.id == id) {
            Some(tag) => {
                tag.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Removes the tag matching `id`. Returns whether anything was removed.
    pub fn delete_tag(&mut self, id: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.id != id);
        self.tags.len() != before
    }

    pub fn find_tag(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    /// Resolves ids to known tags, skipping unknown ones.
    pub fn lookup(&self, ids: &[TagId]) -> Vec<Tag> {
        ids.iter()
            .filter_map(|id| self.find_tag(id).cloned())
            .collect()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn into_inner(self) -> Vec<Tag> {
        self.tags
    }
}
