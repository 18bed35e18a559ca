//! Queries for the frequencies table — every counted family lands here.

use rusqlite::{params, Connection};

use prism_core::errors::StorageError;

use crate::connection::sqlite_err;

/// One frequency row as stored.
#[derive(Debug, Clone)]
pub struct FrequencyRow {
    pub family: String,
    pub value: String,
    pub gloss: Option<String>,
    pub count: i64,
    pub pct: Option<f64>,
}

/// Insert a batch of frequency rows for one family.
pub fn insert_many(
    conn: &Connection,
    snapshot_id: i64,
    family: &str,
    rows: impl IntoIterator<Item = (String, Option<String>, i64, Option<f64>)>,
) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO frequencies (snapshot_id, family, value, gloss, count, pct)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(sqlite_err)?;

    for (value, gloss, count, pct) in rows {
        stmt.execute(params![snapshot_id, family, value, gloss, count, pct])
            .map_err(sqlite_err)?;
    }
    Ok(())
}

/// Query one family's rows, highest count first.
pub fn query_family(
    conn: &Connection,
    snapshot_id: i64,
    family: &str,
) -> Result<Vec<FrequencyRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT family, value, gloss, count, pct FROM frequencies
             WHERE snapshot_id = ?1 AND family = ?2
             ORDER BY count DESC, value ASC",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![snapshot_id, family], |row| {
            Ok(FrequencyRow {
                family: row.get(0)?,
                value: row.get(1)?,
                gloss: row.get(2)?,
                count: row.get(3)?,
                pct: row.get(4)?,
            })
        })
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

/// Distinct family names stored for a snapshot.
pub fn families(conn: &Connection, snapshot_id: i64) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT DISTINCT family FROM frequencies WHERE snapshot_id = ?1 ORDER BY family",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![snapshot_id], |row| row.get::<_, String>(0))
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}
