//! Persisted key-value store.
//!
//! # Responsibility
//! - Define the raw text get/set contract for durable backends.
//! - Provide typed JSON `get`/`set` on top of any backend.
//!
//! # Invariants
//! - Every `set` is one synchronous write to the backing medium.
//! - Absent or undecodable entries fall back to the caller-supplied default.
//! - `get` also falls back on backend read errors; `try_get` returns them.

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
pub mod migrations;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Store entry holding the JSON array of stored-form notes.
pub const NOTES_KEY: &str = "NOTES";
/// Store entry holding the JSON array of tags.
pub const TAGS_KEY: &str = "TAGS";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Json(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "failed to encode store value: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Raw text storage backend.
pub trait KeyValueStore {
    /// Returns the stored text for `key`, or `None` when absent.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;
    /// Durably stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Returns the decoded value for `key`, or `default` when absent or
    /// malformed.
    ///
    /// Backend read failures are returned as errors. Mutation paths load
    /// through this so a failed read is never written back as `default`.
    fn try_get<T: DeserializeOwned>(&self, key: &str, default: T) -> StoreResult<T>
    where
        Self: Sized,
    {
        let raw = self.read(key)?;
        Ok(decode_or_default(key, raw, default))
    }

    /// Returns the decoded value for `key`, or `default`.
    ///
    /// Never fails: backend read errors also fall back to `default`.
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        match self.read(key) {
            Ok(raw) => decode_or_default(key, raw, default),
            Err(err) => {
                error!(
                    "event=store_get module=store status=error key={} error_code=read_failed error={}",
                    key, err
                );
                default
            }
        }
    }

    /// Serializes `value` as JSON and writes it under `key`.
    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StoreResult<()>
    where
        Self: Sized,
    {
        let encoded = serde_json::to_string(value)?;
        self.write(key, &encoded)
    }
}

fn decode_or_default<T: DeserializeOwned>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "event=store_get module=store status=fallback key={} error_code=decode_failed error={}",
                key, err
            );
            default
        }
    }
}
