//! Note registry.
//!
//! # Invariants
//! - `update_note` preserves `id` and replaces every other field.
//! - Title and markdown are stored as given, empty strings included.

use crate::model::note::{NoteData, RawNote};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteRegistry {
    notes: Vec<RawNote>,
}

impl NoteRegistry {
    pub fn new(notes: Vec<RawNote>) -> Self {
        Self { notes }
    }

    /// Appends a new stored note with a fresh id and returns it.
    pub fn create_note(&mut self, data: &NoteData) -> RawNote {
        let note = RawNote::from_data(data);
        self.notes.push(note.clone());
        note
    }

    /// Replaces title, markdown and tag ids of the note matching `id`.
    ///
    /// Returns `false` and leaves the collection unchanged when not found.
    pub fn update_note(&mut self, id: &str, data: &NoteData) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.apply(data);
                true
            }
            None => false,
        }
    }

    /// Removes the note matching `id`. Returns whether anything was removed.
    pub fn delete_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    pub fn find_note(&self, id: &str) -> Option<&RawNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn notes(&self) -> &[RawNote] {
        &self.notes
    }

    pub fn into_inner(self) -> Vec<RawNote> {
        self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::NoteRegistry;
    use crate::model::note::NoteData;
    use crate::model::tag::Tag;
    use std::collections::HashSet;

    #[test]
    fn create_note_count_matches_calls_with_distinct_ids() {
        let mut registry = NoteRegistry::default();
        for idx in 0..25 {
            registry.create_note(&NoteData::new(format!("note {idx}"), "", Vec::new()));
        }
        let ids: HashSet<_> = registry.notes().iter().map(|note| note.id.clone()).collect();
        assert_eq!(registry.notes().len(), 25);
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn create_note_accepts_empty_fields_and_keeps_duplicate_tags() {
        let tag = Tag::with_id("t1", "x");
        let mut registry = NoteRegistry::default();
        let note = registry.create_note(&NoteData::new("", "", vec![tag.clone(), tag]));
        assert_eq!(note.title, "");
        assert_eq!(note.markdown, "");
        assert_eq!(note.tag_ids, vec!["t1".to_string(), "t1".to_string()]);
    }

    #[test]
    fn update_note_preserves_id_and_replaces_fields() {
        let mut registry = NoteRegistry::default();
        let created = registry.create_note(&NoteData::new("T", "M", Vec::new()));
        let other = registry.create_note(&NoteData::new("other", "body", Vec::new()));

        let data = NoteData::new("T2", "M2", vec![Tag::with_id("t1", "x")]);
        assert!(registry.update_note(&created.id, &data));

        let updated = registry.find_note(&created.id).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.markdown, "M2");
        assert_eq!(updated.tag_ids, vec!["t1".to_string()]);
        assert_eq!(registry.find_note(&other.id), Some(&other));
    }

    #[test]
    fn update_and_delete_unknown_id_are_noops() {
        let mut registry = NoteRegistry::default();
        registry.create_note(&NoteData::new("T", "M", Vec::new()));
        let before = registry.clone();

        assert!(!registry.update_note("missing", &NoteData::default()));
        assert!(!registry.delete_note("missing"));
        assert_eq!(registry, before);
    }

    #[test]
    fn delete_note_removes_exactly_one() {
        let mut registry = NoteRegistry::default();
        let first = registry.create_note(&NoteData::new("a", "", Vec::new()));
        registry.create_note(&NoteData::new("b", "", Vec::new()));

        assert!(registry.delete_note(&first.id));
        assert_eq!(registry.notes().len(), 1);
        assert!(registry.find_note(&first.id).is_none());
    }
}
