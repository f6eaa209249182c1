//! In-memory registries for the two flat collections.
//!
//! # Responsibility
//! - Apply create/update/delete operations to a whole collection.
//! - Keep identifier generation and tag-id projection in one place.
//!
//! # Invariants
//! - Operations on an unknown id are no-ops, never errors.
//! - Registries never touch storage; the notebook controller persists them.

pub mod notes;
pub mod tags;
