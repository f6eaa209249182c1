//! List view filtering by title and selected tags.
//!
//! # Invariants
//! - A blank title query matches every note.
//! - A note matches only when it carries every selected tag.
//! - Input order is preserved.

use crate::model::note::Note;
use crate::model::tag::TagId;

/// Search-form criteria for the note list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-insensitive substring of the note title.
    pub title: Option<String>,
    /// Tags that must all be present on the note.
    pub tag_ids: Vec<TagId>,
}

impl NoteFilter {
    pub fn matches(&self, note: &Note) -> bool {
        let title_ok = match self.title.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => note
                .title
                .to_lowercase()
                .contains(query.to_lowercase().as_str()),
        };

        title_ok
            && self
                .tag_ids
                .iter()
                .all(|wanted| note.tags.iter().any(|tag| &tag.id == wanted))
    }
}

/// Returns the notes accepted by `filter`, in input order.
pub fn filter_notes(notes: Vec<Note>, filter: &NoteFilter) -> Vec<Note> {
    notes.into_iter().filter(|note| filter.matches(note)).collect()
}
