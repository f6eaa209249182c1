//! Join of stored notes with tags.
//!
//! # Invariants
//! - Resolved tags follow the tag collection order, not `tag_ids` order.
//! - Dangling tag ids are silently dropped.
//! - Duplicate `tag_ids` entries resolve to a single tag.

use crate::model::note::{Note, RawNote};
use crate::model::tag::Tag;

/// Resolves every stored note into its view form.
pub fn resolve(notes: &[RawNote], tags: &[Tag]) -> Vec<Note> {
    notes.iter().map(|note| resolve_one(note, tags)).collect()
}

/// Resolves a single stored note into its view form.
pub fn resolve_one(note: &RawNote, tags: &[Tag]) -> Note {
    Note {
        id: note.id.clone(),
        title: note.title.clone(),
        markdown: note.markdown.clone(),
        tags: tags
            .iter()
            .filter(|tag| note.tag_ids.contains(&tag.id))
            .cloned()
            .collect(),
    }
}
