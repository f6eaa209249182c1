//! Notebook controller: the single owner of application state.
//!
//! # Responsibility
//! - Own the persisted store and expose every note/tag use-case on it.
//! - Perform each mutation as a full read-modify-write of one collection.
//! - Serve the joined view and the per-route screens.
//!
//! # Invariants
//! - Collections are loaded from the store on every call; nothing is cached.
//! - Mutations fail on a backend read error instead of overwriting the
//!   stored collection with an empty one.
//! - A no-op mutation (unknown id) does not write to the store.
//! - Log events carry ids and counts only, never note content.

use crate::model::note::{Note, NoteData, RawNote};
use crate::model::tag::{Tag, TagId};
use crate::registry::notes::NoteRegistry;
use crate::registry::tags::TagRegistry;
use crate::route::{Route, Screen};
use crate::store::{KeyValueStore, StoreResult, NOTES_KEY, TAGS_KEY};
use crate::view::filter::{filter_notes, NoteFilter};
use crate::view::join::{resolve, resolve_one};
use log::{debug, info};

/// Top-level controller over one key-value store.
pub struct Notebook<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Notebook<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // Tags.

    /// Creates a tag with a fresh id and persists the tag collection.
    pub fn add_tag(&mut self, label: impl Into<String>) -> StoreResult<Tag> {
        let mut registry = self.load_tags_for_update()?;
        let tag = registry.add_tag(label);
        self.save_tags(registry)?;
        info!("event=tag_add module=notebook status=ok tag_id={}", tag.id);
        Ok(tag)
    }

    /// Persists a tag whose id was minted by the caller.
    pub fn insert_tag(&mut self, tag: Tag) -> StoreResult<()> {
        let mut registry = self.load_tags_for_update()?;
        let tag_id = tag.id.clone();
        registry.insert_tag(tag);
        self.save_tags(registry)?;
        info!("event=tag_add module=notebook status=ok tag_id={tag_id}");
        Ok(())
    }

    /// Renames a tag. Returns `false` when `id` is unknown.
    pub fn update_tag(&mut self, id: &str, label: impl Into<String>) -> StoreResult<bool> {
        let mut registry = self.load_tags_for_update()?;
        if !registry.update_tag(id, label) {
            log_noop("tag_update", id);
            return Ok(false);
        }
        self.save_tags(registry)?;
        info!("event=tag_update module=notebook status=ok tag_id={id}");
        Ok(true)
    }

    /// Deletes a tag without touching notes that reference it.
    pub fn delete_tag(&mut self, id: &str) -> StoreResult<bool> {
        let mut registry = self.load_tags_for_update()?;
        if !registry.delete_tag(id) {
            log_noop("tag_delete", id);
            return Ok(false);
        }
        self.save_tags(registry)?;
        info!("event=tag_delete module=notebook status=ok tag_id={id}");
        Ok(true)
    }

    /// All tags in collection order.
    pub fn available_tags(&self) -> Vec<Tag> {
        self.load_tags().into_inner()
    }

    /// Resolves ids to known tags, dropping unknown ones.
    pub fn tags_by_id(&self, ids: &[TagId]) -> Vec<Tag> {
        self.load_tags().lookup(ids)
    }

    // Notes.

    /// Creates a note and persists the note collection.
    pub fn create_note(&mut self, data: &NoteData) -> StoreResult<RawNote> {
        let mut registry = self.load_notes_for_update()?;
        let note = registry.create_note(data);
        let total = registry.notes().len();
        self.save_notes(registry)?;
        info!(
            "event=note_create module=notebook status=ok note_id={} tag_count={} total={}",
            note.id,
            note.tag_ids.len(),
            total
        );
        Ok(note)
    }

    /// Replaces a note's fields. Returns `false` when `id` is unknown.
    pub fn update_note(&mut self, id: &str, data: &NoteData) -> StoreResult<bool> {
        let mut registry = self.load_notes_for_update()?;
        if !registry.update_note(id, data) {
            log_noop("note_update", id);
            return Ok(false);
        }
        self.save_notes(registry)?;
        info!(
            "event=note_update module=notebook status=ok note_id={} tag_count={}",
            id,
            data.tags.len()
        );
        Ok(true)
    }

    /// Deletes a note. Returns `false` when `id` is unknown.
    pub fn delete_note(&mut self, id: &str) -> StoreResult<bool> {
        let mut registry = self.load_notes_for_update()?;
        if !registry.delete_note(id) {
            log_noop("note_delete", id);
            return Ok(false);
        }
        self.save_notes(registry)?;
        info!("event=note_delete module=notebook status=ok note_id={id}");
        Ok(true)
    }

    /// Stored-form notes exactly as persisted.
    pub fn raw_notes(&self) -> Vec<RawNote> {
        self.load_notes().into_inner()
    }

    /// Every note joined with its tags, recomputed on each call.
    pub fn notes_with_tags(&self) -> Vec<Note> {
        resolve(self.load_notes().notes(), self.load_tags().tags())
    }

    pub fn note_with_tags(&self, id: &str) -> Option<Note> {
        let notes = self.load_notes();
        let note = notes.find_note(id)?;
        Some(resolve_one(note, self.load_tags().tags()))
    }

    /// Joined notes narrowed by the list view search form.
    pub fn list_notes(&self, filter: &NoteFilter) -> Vec<Note> {
        filter_notes(self.notes_with_tags(), filter)
    }

    // Navigation.

    /// Builds the screen for a presentation path.
    ///
    /// Detail and edit paths naming an unknown note redirect to the list.
    pub fn open_route(&self, path: &str) -> Screen {
        let route = Route::parse(path);
        debug!(
            "event=route_open module=notebook status=ok route={}",
            route.path()
        );
        match route {
            Route::List => self.list_screen(),
            Route::Create => Screen::Create {
                available_tags: self.available_tags(),
            },
            Route::Detail(id) => match self.note_with_tags(&id) {
                Some(note) => Screen::Detail(note),
                None => self.list_screen(),
            },
            Route::Edit(id) => match self.note_with_tags(&id) {
                Some(note) => Screen::Edit {
                    note,
                    available_tags: self.available_tags(),
                },
                None => self.list_screen(),
            },
        }
    }

    fn list_screen(&self) -> Screen {
        Screen::List {
            notes: self.notes_with_tags(),
            available_tags: self.available_tags(),
        }
    }

    fn load_notes(&self) -> NoteRegistry {
        NoteRegistry::new(self.store.get(NOTES_KEY, Vec::new()))
    }

    fn load_tags(&self) -> TagRegistry {
        TagRegistry::new(self.store.get(TAGS_KEY, Vec::new()))
    }

    fn load_notes_for_update(&self) -> StoreResult<NoteRegistry> {
        Ok(NoteRegistry::new(self.store.try_get(NOTES_KEY, Vec::new())?))
    }

    fn load_tags_for_update(&self) -> StoreResult<TagRegistry> {
        Ok(TagRegistry::new(self.store.try_get(TAGS_KEY, Vec::new())?))
    }

    fn save_notes(&mut self, registry: NoteRegistry) -> StoreResult<()> {
        self.store.set(NOTES_KEY, registry.notes())
    }

    fn save_tags(&mut self, registry: TagRegistry) -> StoreResult<()> {
        self.store.set(TAGS_KEY, registry.tags())
    }
}

fn log_noop(event: &str, id: &str) {
    debug!("event={event} module=notebook status=noop reason=not_found id={id}");
}
