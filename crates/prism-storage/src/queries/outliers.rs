//! Queries for the outliers table.

use rusqlite::{params, Connection};

use prism_analysis::patterns::OutlierRow;
use prism_core::errors::StorageError;

use crate::connection::sqlite_err;

/// Insert the outlier rows of a snapshot.
pub fn insert_many(
    conn: &Connection,
    snapshot_id: i64,
    rows: &[OutlierRow],
) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO outliers
                (snapshot_id, metric, job_id, value, lower_fence, upper_fence)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(sqlite_err)?;

    for r in rows {
        stmt.execute(params![
            snapshot_id,
            r.metric,
            r.job_id,
            r.value,
            r.lower_fence,
            r.upper_fence
        ])
        .map_err(sqlite_err)?;
    }
    Ok(())
}

/// Load a snapshot's outlier rows.
pub fn query_all(conn: &Connection, snapshot_id: i64) -> Result<Vec<OutlierRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT metric, job_id, value, lower_fence, upper_fence FROM outliers
             WHERE snapshot_id = ?1 ORDER BY metric, job_id",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![snapshot_id], |row| {
            Ok(OutlierRow {
                metric: row.get(0)?,
                job_id: row.get(1)?,
                value: row.get(2)?,
                lower_fence: row.get(3)?,
                upper_fence: row.get(4)?,
            })
        })
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}
