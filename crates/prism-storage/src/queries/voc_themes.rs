//! Queries for the voc_themes rollup table.

use rusqlite::{params, Connection};

use prism_analysis::voc::ThemeSummary;
use prism_core::errors::StorageError;

use crate::connection::sqlite_err;

/// A stored theme rollup row.
#[derive(Debug, Clone)]
pub struct VocThemeRow {
    pub theme: String,
    pub entry_count: i64,
    pub share_pct: f64,
    pub sentence_count: i64,
}

/// Insert the theme rollup of a snapshot.
pub fn insert_many(
    conn: &Connection,
    snapshot_id: i64,
    summaries: &[ThemeSummary],
) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO voc_themes
                (snapshot_id, theme, entry_count, share_pct, sentence_count)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .map_err(sqlite_err)?;

    for s in summaries {
        stmt.execute(params![
            snapshot_id,
            s.theme,
            s.entry_count as i64,
            s.share_pct,
            s.sentence_count as i64
        ])
        .map_err(sqlite_err)?;
    }
    Ok(())
}

/// Load a snapshot's theme rollup, largest theme first.
pub fn query_all(conn: &Connection, snapshot_id: i64) -> Result<Vec<VocThemeRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT theme, entry_count, share_pct, sentence_count FROM voc_themes
             WHERE snapshot_id = ?1 ORDER BY entry_count DESC, theme ASC",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![snapshot_id], |row| {
            Ok(VocThemeRow {
                theme: row.get(0)?,
                entry_count: row.get(1)?,
                share_pct: row.get(2)?,
                sentence_count: row.get(3)?,
            })
        })
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}
