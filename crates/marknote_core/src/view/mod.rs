//! Read-only derived views over notes and tags.
//!
//! # Responsibility
//! - Join stored notes with the tag collection (`join`).
//! - Narrow the joined list for the list view search form (`filter`).
//!
//! # Invariants
//! - Views own no state and are recomputed from scratch on every call.

pub mod filter;
pub mod join;
