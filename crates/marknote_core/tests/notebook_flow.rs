use marknote_core::{
    KeyValueStore, MemoryStore, NoteData, NoteFilter, Notebook, RawNote, Screen, SqliteStore,
    StoreError, StoreResult, Tag, NOTES_KEY, TAGS_KEY,
};
use std::cell::Cell;
use std::collections::HashSet;

/// Memory store whose next `read` can be made to fail like a locked database.
#[derive(Default)]
struct LockedOnceStore {
    inner: MemoryStore,
    fail_next_read: Cell<bool>,
}

impl KeyValueStore for LockedOnceStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_next_read.replace(false) {
            return Err(StoreError::Sqlite(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
                Some("database is locked".to_string()),
            )));
        }
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.write(key, value)
    }
}

#[test]
fn tagged_note_scenario_resolves_through_join_view() {
    let mut notebook = Notebook::new(MemoryStore::new());

    let tag = notebook.add_tag("work").unwrap();
    assert_eq!(tag.label, "work");

    let note = notebook
        .create_note(&NoteData::new("T", "M", vec![tag.clone()]))
        .unwrap();
    assert_eq!(note.tag_ids, vec![tag.id.clone()]);

    let views = notebook.notes_with_tags();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, note.id);
    assert_eq!(views[0].tags, vec![Tag::with_id(tag.id.clone(), "work")]);
}

#[test]
fn create_note_count_and_ids_are_distinct() {
    let mut notebook = Notebook::new(MemoryStore::new());
    for idx in 0..12 {
        notebook
            .create_note(&NoteData::new(format!("n{idx}"), "", Vec::new()))
            .unwrap();
    }

    let notes = notebook.raw_notes();
    let ids: HashSet<_> = notes.iter().map(|note| note.id.as_str()).collect();
    assert_eq!(notes.len(), 12);
    assert_eq!(ids.len(), 12);
}

#[test]
fn update_note_preserves_id_or_is_noop() {
    let mut notebook = Notebook::new(MemoryStore::new());
    let created = notebook
        .create_note(&NoteData::new("draft", "", Vec::new()))
        .unwrap();

    let data = NoteData::new("final", "body", vec![Tag::with_id("t9", "ghost")]);
    assert!(notebook.update_note(&created.id, &data).unwrap());
    let stored = notebook.raw_notes();
    assert_eq!(
        stored,
        vec![RawNote {
            id: created.id.clone(),
            title: "final".to_string(),
            markdown: "body".to_string(),
            tag_ids: vec!["t9".to_string()],
        }]
    );

    assert!(!notebook.update_note("missing", &NoteData::default()).unwrap());
    assert_eq!(notebook.raw_notes(), stored);
}

#[test]
fn delete_tag_keeps_notes_and_drops_reference_from_view() {
    let mut notebook = Notebook::new(MemoryStore::new());
    let work = notebook.add_tag("work").unwrap();
    let home = notebook.add_tag("home").unwrap();
    let note = notebook
        .create_note(&NoteData::new("T", "M", vec![home.clone(), work.clone()]))
        .unwrap();

    assert!(notebook.delete_tag(&work.id).unwrap());
    assert!(!notebook.delete_tag(&work.id).unwrap());

    assert_eq!(notebook.available_tags(), vec![home.clone()]);
    assert_eq!(notebook.raw_notes()[0].tag_ids, note.tag_ids);
    assert_eq!(notebook.note_with_tags(&note.id).unwrap().tags, vec![home]);
}

#[test]
fn rename_tag_is_visible_on_every_note() {
    let mut notebook = Notebook::new(MemoryStore::new());
    let tag = notebook.add_tag("wrk").unwrap();
    for title in ["a", "b"] {
        notebook
            .create_note(&NoteData::new(title, "", vec![tag.clone()]))
            .unwrap();
    }

    assert!(notebook.update_tag(&tag.id, "work").unwrap());
    for view in notebook.notes_with_tags() {
        assert_eq!(view.tags, vec![Tag::with_id(tag.id.clone(), "work")]);
    }
}

#[test]
fn delete_note_removes_exactly_one() {
    let mut notebook = Notebook::new(MemoryStore::new());
    let first = notebook
        .create_note(&NoteData::new("a", "", Vec::new()))
        .unwrap();
    notebook
        .create_note(&NoteData::new("b", "", Vec::new()))
        .unwrap();

    assert!(notebook.delete_note(&first.id).unwrap());
    assert_eq!(notebook.raw_notes().len(), 1);
    assert!(!notebook.delete_note(&first.id).unwrap());
    assert_eq!(notebook.raw_notes().len(), 1);
}

#[test]
fn list_notes_filters_by_title_and_tags() {
    let mut notebook = Notebook::new(MemoryStore::new());
    let work = notebook.add_tag("work").unwrap();
    notebook
        .create_note(&NoteData::new("Sprint plan", "", vec![work.clone()]))
        .unwrap();
    notebook
        .create_note(&NoteData::new("Plan trip", "", Vec::new()))
        .unwrap();

    let by_title = notebook.list_notes(&NoteFilter {
        title: Some("plan".to_string()),
        tag_ids: Vec::new(),
    });
    assert_eq!(by_title.len(), 2);

    let by_tag = notebook.list_notes(&NoteFilter {
        title: Some("plan".to_string()),
        tag_ids: vec![work.id],
    });
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "Sprint plan");
}

#[test]
fn open_route_serves_each_screen() {
    let mut notebook = Notebook::new(MemoryStore::new());
    let tag = notebook.add_tag("work").unwrap();
    let note = notebook
        .create_note(&NoteData::new("T", "M", vec![tag.clone()]))
        .unwrap();

    match notebook.open_route(&format!("/{}", note.id)) {
        Screen::Detail(view) => assert_eq!(view.tags, vec![tag.clone()]),
        other => panic!("unexpected screen: {other:?}"),
    }
    match notebook.open_route(&format!("/{}/edit", note.id)) {
        Screen::Edit {
            note: view,
            available_tags,
        } => {
            assert_eq!(view.id, note.id);
            assert_eq!(available_tags, vec![tag]);
        }
        other => panic!("unexpected screen: {other:?}"),
    }
    match notebook.open_route("/does/not/exist") {
        Screen::List { notes, .. } => assert_eq!(notes.len(), 1),
        other => panic!("unexpected screen: {other:?}"),
    }
}

#[test]
fn notebook_state_survives_reopen_of_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marknote.sqlite3");

    let (tag, note) = {
        let mut notebook = Notebook::new(SqliteStore::open(&path).unwrap());
        let tag = notebook.add_tag("work").unwrap();
        let note = notebook
            .create_note(&NoteData::new("T", "M", vec![tag.clone()]))
            .unwrap();
        (tag, note)
    };

    let notebook = Notebook::new(SqliteStore::open(&path).unwrap());
    assert_eq!(notebook.available_tags(), vec![tag]);
    assert_eq!(notebook.raw_notes(), vec![note]);
}

#[test]
fn corrupted_notes_entry_degrades_to_empty_collection() {
    let mut store = MemoryStore::new();
    store.write(NOTES_KEY, "[{broken").unwrap();
    store.set(TAGS_KEY, &vec![Tag::with_id("t1", "x")]).unwrap();

    let mut notebook = Notebook::new(store);
    assert!(notebook.notes_with_tags().is_empty());
    assert_eq!(notebook.available_tags().len(), 1);

    // The next write replaces the corrupted entry.
    notebook
        .create_note(&NoteData::new("fresh", "", Vec::new()))
        .unwrap();
    assert_eq!(notebook.raw_notes().len(), 1);
}

#[test]
fn mutation_after_read_failure_errors_and_keeps_stored_notes() {
    let mut notebook = Notebook::new(LockedOnceStore::default());
    for title in ["a", "b", "c"] {
        notebook
            .create_note(&NoteData::new(title, "", Vec::new()))
            .unwrap();
    }

    notebook.store().fail_next_read.set(true);
    let err = notebook
        .create_note(&NoteData::new("d", "", Vec::new()))
        .unwrap_err();
    assert!(matches!(err, StoreError::Sqlite(_)));
    assert_eq!(notebook.raw_notes().len(), 3);

    notebook.store().fail_next_read.set(true);
    assert!(notebook.delete_note("anything").is_err());
    assert_eq!(notebook.raw_notes().len(), 3);
}

#[test]
fn tag_mutation_after_read_failure_keeps_stored_tags() {
    let mut notebook = Notebook::new(LockedOnceStore::default());
    let work = notebook.add_tag("work").unwrap();
    notebook.add_tag("home").unwrap();

    notebook.store().fail_next_read.set(true);
    assert!(notebook.add_tag("later").is_err());
    notebook.store().fail_next_read.set(true);
    assert!(notebook.update_tag(&work.id, "job").is_err());

    let labels: Vec<_> = notebook
        .available_tags()
        .into_iter()
        .map(|tag| tag.label)
        .collect();
    assert_eq!(labels, vec!["work", "home"]);
}

#[test]
fn read_only_views_fall_back_to_empty_on_read_failure() {
    let mut notebook = Notebook::new(LockedOnceStore::default());
    notebook
        .create_note(&NoteData::new("a", "", Vec::new()))
        .unwrap();

    notebook.store().fail_next_read.set(true);
    assert!(notebook.raw_notes().is_empty());
    assert_eq!(notebook.raw_notes().len(), 1);
}
