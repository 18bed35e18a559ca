//! Queries for the job_keywords table.

use rusqlite::{params, Connection};

use prism_analysis::keywords::JobKeywords;
use prism_core::errors::StorageError;

use crate::connection::sqlite_err;

/// Insert the per-job keyword rows of a snapshot.
/// Keyword lists are stored comma-joined, matching the export format.
pub fn insert_many(
    conn: &Connection,
    snapshot_id: i64,
    rows: &[JobKeywords],
) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO job_keywords
                (snapshot_id, job_id, brand_name, job_name,
                 job_keywords, model_keywords, num_models)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(sqlite_err)?;

    for r in rows {
        stmt.execute(params![
            snapshot_id,
            r.job_id,
            r.brand_name,
            r.job_name,
            r.job_keywords.join(", "),
            r.model_keywords.join(", "),
            r.num_models as i64
        ])
        .map_err(sqlite_err)?;
    }
    Ok(())
}

/// Load a snapshot's job keyword rows.
pub fn query_all(conn: &Connection, snapshot_id: i64) -> Result<Vec<JobKeywords>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT job_id, brand_name, job_name, job_keywords, model_keywords, num_models
             FROM job_keywords WHERE snapshot_id = ?1 ORDER BY job_id",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![snapshot_id], |row| {
            Ok(JobKeywords {
                job_id: row.get(0)?,
                brand_name: row.get(1)?,
                job_name: row.get(2)?,
                job_keywords: split_list(&row.get::<_, String>(3)?),
                model_keywords: split_list(&row.get::<_, String>(4)?),
                num_models: row.get::<_, i64>(5)? as u64,
            })
        })
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
