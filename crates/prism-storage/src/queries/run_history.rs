//! Queries for the run_history table — append-only log of pipeline runs.

use rusqlite::{params, Connection};

use prism_core::errors::StorageError;

use crate::connection::sqlite_err;

/// A run history record.
#[derive(Debug, Clone)]
pub struct RunHistoryRow {
    pub id: i64,
    pub started_at: i64,
    pub completed_at: Option<i64>,
    pub data_dir: String,
    pub total_bookings: Option<i64>,
    pub unique_jobs: Option<i64>,
    pub voc_entries: Option<i64>,
    pub row_errors: Option<i64>,
    pub duration_ms: Option<i64>,
    pub status: String,
    pub error: Option<String>,
}

/// Insert a new run record (status = 'running'). Returns the row id.
pub fn insert_run_start(
    conn: &Connection,
    started_at: i64,
    data_dir: &str,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO run_history (started_at, data_dir, status) VALUES (?1, ?2, 'running')",
        params![started_at, data_dir],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Update a run record with completion data.
#[allow(clippy::too_many_arguments)]
pub fn update_run_complete(
    conn: &Connection,
    id: i64,
    completed_at: i64,
    total_bookings: i64,
    unique_jobs: i64,
    voc_entries: i64,
    row_errors: i64,
    duration_ms: i64,
    status: &str,
    error: Option<&str>,
) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE run_history SET
            completed_at = ?1, total_bookings = ?2, unique_jobs = ?3,
            voc_entries = ?4, row_errors = ?5, duration_ms = ?6,
            status = ?7, error = ?8
         WHERE id = ?9",
        params![
            completed_at,
            total_bookings,
            unique_jobs,
            voc_entries,
            row_errors,
            duration_ms,
            status,
            error,
            id
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Query recent run history entries, most recent first.
pub fn query_recent(conn: &Connection, limit: usize) -> Result<Vec<RunHistoryRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, started_at, completed_at, data_dir, total_bookings, unique_jobs,
                    voc_entries, row_errors, duration_ms, status, error
             FROM run_history ORDER BY started_at DESC LIMIT ?1",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(RunHistoryRow {
                id: row.get(0)?,
                started_at: row.get(1)?,
                completed_at: row.get(2)?,
                data_dir: row.get(3)?,
                total_bookings: row.get(4)?,
                unique_jobs: row.get(5)?,
                voc_entries: row.get(6)?,
                row_errors: row.get(7)?,
                duration_ms: row.get(8)?,
                status: row.get(9)?,
                error: row.get(10)?,
            })
        })
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

/// Count total run history entries.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM run_history", [], |row| row.get(0))
        .map_err(sqlite_err)
}
