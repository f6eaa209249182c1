//! Navigation contract between the presentation layer and the core.
//!
//! # Responsibility
//! - Parse presentation paths into the five supported routes.
//! - Describe what each screen needs from the notebook (`Screen`).
//!
//! # Invariants
//! - Unrecognized paths resolve to `Route::List`.
//! - `Route::parse(route.path()) == route` for every route.

use crate::model::note::{Note, NoteId};
use crate::model::tag::Tag;

/// Parsed presentation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: all notes.
    List,
    /// `/new`: create form.
    Create,
    /// `/:id`: single note.
    Detail(NoteId),
    /// `/:id/edit`: edit form for one note.
    Edit(NoteId),
}

impl Route {
    /// Parses a path; anything unrecognized redirects to the list.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::List,
            ["new"] => Self::Create,
            [id] => Self::Detail((*id).to_string()),
            [id, "edit"] => Self::Edit((*id).to_string()),
            _ => Self::List,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Create => "/new".to_string(),
            Self::Detail(id) => format!("/{id}"),
            Self::Edit(id) => format!("/{id}/edit"),
        }
    }
}

/// Data a route renders, as produced by `Notebook::open_route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List {
        notes: Vec<Note>,
        available_tags: Vec<Tag>,
    },
    Create {
        available_tags: Vec<Tag>,
    },
    Detail(Note),
    Edit {
        note: Note,
        available_tags: Vec<Tag>,
    },
}
