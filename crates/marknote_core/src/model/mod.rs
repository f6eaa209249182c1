//! Note and tag domain model.
//!
//! # Responsibility
//! - Define the stored shapes persisted in the key-value store.
//! - Define the input and view shapes exchanged with the presentation layer.
//!
//! # Invariants
//! - Note and tag identifiers are unique within their own collection.
//! - Only stored forms (`RawNote`, `Tag`) are ever serialized to storage.

pub mod note;
pub mod tag;

use uuid::Uuid;

/// Generates a fresh collision-resistant identifier (random UUID v4).
///
/// Identifiers carry no ordering semantics.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
