//! Queries for the numeric_summaries table.

use rusqlite::{params, Connection};

use prism_analysis::patterns::NumericSummary;
use prism_core::errors::StorageError;

use crate::connection::sqlite_err;

/// Insert the numeric summaries of a snapshot.
pub fn insert_many(
    conn: &Connection,
    snapshot_id: i64,
    summaries: &[NumericSummary],
) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO numeric_summaries
                (snapshot_id, metric, count, mean, median, min, max)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(sqlite_err)?;

    for s in summaries {
        stmt.execute(params![
            snapshot_id,
            s.metric,
            s.count as i64,
            s.mean,
            s.median,
            s.min,
            s.max
        ])
        .map_err(sqlite_err)?;
    }
    Ok(())
}

/// Load a snapshot's numeric summaries.
pub fn query_all(conn: &Connection, snapshot_id: i64) -> Result<Vec<NumericSummary>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT metric, count, mean, median, min, max FROM numeric_summaries
             WHERE snapshot_id = ?1 ORDER BY metric",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![snapshot_id], |row| {
            Ok(NumericSummary {
                metric: row.get(0)?,
                count: row.get::<_, i64>(1)? as u64,
                mean: row.get(2)?,
                median: row.get(3)?,
                min: row.get(4)?,
                max: row.get(5)?,
            })
        })
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}
