//! Core domain logic for MarkNote.
//! This crate is the single source of truth for note and tag invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod notebook;
pub mod registry;
pub mod route;
pub mod store;
pub mod view;

pub use config::{ConfigError, NotebookConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteData, NoteId, RawNote};
pub use model::tag::{Tag, TagId};
pub use notebook::Notebook;
pub use registry::notes::NoteRegistry;
pub use registry::tags::TagRegistry;
pub use route::{Route, Screen};
pub use store::{
    KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult, NOTES_KEY, TAGS_KEY,
};
pub use view::filter::{filter_notes, NoteFilter};
pub use view::join::{resolve, resolve_one};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
