//! Queries for the snapshots table — one JSON bundle artifact per run.

use rusqlite::{params, Connection, OptionalExtension};

use prism_core::errors::StorageError;

use crate::connection::sqlite_err;

/// Insert a snapshot. Returns the snapshot id.
pub fn insert(
    conn: &Connection,
    run_id: Option<i64>,
    generated_at: &str,
    created_at: i64,
    bundle_json: &str,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO snapshots (run_id, generated_at, created_at, bundle_json)
         VALUES (?1, ?2, ?3, ?4)",
        params![run_id, generated_at, created_at, bundle_json],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Load a snapshot's bundle JSON by id.
pub fn load_json(conn: &Connection, id: i64) -> Result<String, StorageError> {
    conn.query_row(
        "SELECT bundle_json FROM snapshots WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )
    .optional()
    .map_err(sqlite_err)?
    .ok_or(StorageError::NotFound {
        what: format!("snapshot {id}"),
    })
}

/// Load the most recent snapshot's (id, bundle JSON), if any exists.
pub fn load_latest_json(conn: &Connection) -> Result<Option<(i64, String)>, StorageError> {
    conn.query_row(
        "SELECT id, bundle_json FROM snapshots ORDER BY created_at DESC, id DESC LIMIT 1",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(sqlite_err)
}

/// Count stored snapshots.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM snapshots", [], |row| row.get(0))
        .map_err(sqlite_err)
}
