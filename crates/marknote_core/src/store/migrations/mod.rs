//! SQLite schema steps for the key-value backend.
//!
//! # Invariants
//! - `STEPS` is sorted by strictly increasing `version`.
//! - Each step commits together with its `PRAGMA user_version` bump, so an
//!   interrupted upgrade resumes from the last committed step.

use crate::store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "kv_entries",
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Returns the newest schema version this binary can open.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |step| step.version)
}

/// Reads the schema version recorded in the database.
pub fn schema_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Brings the schema up to `latest_version()`.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the database is newer than this binary.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let current = schema_version(conn)?;
    let latest = latest_version();
    if current > latest {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }

    for step in pending_steps(current) {
        let tx = conn.transaction()?;
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
        tx.commit()?;
        info!(
            "event=store_migrate module=store status=ok version={} name={}",
            step.version, step.name
        );
    }

    Ok(())
}

fn pending_steps(current: u32) -> &'static [SchemaStep] {
    let first_pending = STEPS.partition_point(|step| step.version <= current);
    &STEPS[first_pending..]
}
