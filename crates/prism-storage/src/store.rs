//! Bundle persistence: one snapshot per run.

use std::time::{SystemTime, UNIX_EPOCH};

use prism_analysis::AnalysisBundle;
use prism_core::errors::StorageError;

use crate::connection::{sqlite_err, Database};
use crate::queries::{frequencies, job_keywords, numeric, outliers, snapshots, voc_themes};

/// Persist a bundle: the JSON artifact plus the normalized result tables,
/// in one transaction. Returns the snapshot id.
pub fn save_bundle(
    db: &Database,
    run_id: Option<i64>,
    bundle: &AnalysisBundle,
) -> Result<i64, StorageError> {
    let bundle_json = serde_json::to_string(bundle).map_err(|e| StorageError::Sqlite {
        message: format!("bundle serialization: {e}"),
    })?;
    let created_at = unix_now();

    db.with_conn(|conn| {
        let tx = conn.unchecked_transaction().map_err(sqlite_err)?;

        let snapshot_id = snapshots::insert(
            &tx,
            run_id,
            &bundle.generated_at,
            created_at,
            &bundle_json,
        )?;

        // Frequency families.
        for field in &bundle.patterns.fields {
            frequencies::insert_many(
                &tx,
                snapshot_id,
                &format!("field:{}", field.field),
                field
                    .entries
                    .iter()
                    .map(|e| (e.value.clone(), None, e.count as i64, Some(e.pct))),
            )?;
        }
        for combo in &bundle.patterns.combos {
            frequencies::insert_many(
                &tx,
                snapshot_id,
                &format!("combo:{}", combo.kind),
                combo
                    .entries
                    .iter()
                    .map(|e| (e.value.clone(), None, e.count as i64, Some(e.pct))),
            )?;
        }
        frequencies::insert_many(
            &tx,
            snapshot_id,
            "full_pattern",
            bundle
                .patterns
                .full_patterns
                .iter()
                .map(|e| (e.value.clone(), None, e.count as i64, Some(e.pct))),
        )?;
        frequencies::insert_many(
            &tx,
            snapshot_id,
            "monthly",
            bundle
                .patterns
                .monthly
                .iter()
                .map(|m| (m.month.clone(), None, m.jobs as i64, None)),
        )?;
        frequencies::insert_many(
            &tx,
            snapshot_id,
            "language",
            bundle
                .vocabulary
                .language_distribution
                .iter()
                .map(|e| (e.value.clone(), None, e.count as i64, None)),
        )?;
        frequencies::insert_many(
            &tx,
            snapshot_id,
            "job_name",
            bundle
                .vocabulary
                .top_job_names
                .iter()
                .map(|e| (e.value.clone(), e.gloss.clone(), e.count as i64, None)),
        )?;
        frequencies::insert_many(
            &tx,
            snapshot_id,
            "phrase",
            bundle
                .vocabulary
                .top_phrases
                .iter()
                .map(|e| (e.value.clone(), e.gloss.clone(), e.count as i64, None)),
        )?;
        frequencies::insert_many(
            &tx,
            snapshot_id,
            "concept",
            bundle
                .vocabulary
                .concept_mentions
                .iter()
                .map(|e| (e.value.clone(), None, e.count as i64, None)),
        )?;

        numeric::insert_many(&tx, snapshot_id, &bundle.patterns.numeric)?;
        outliers::insert_many(&tx, snapshot_id, &bundle.patterns.outliers)?;

        if let Some(ref voc) = bundle.voc {
            voc_themes::insert_many(&tx, snapshot_id, &voc.theme_summaries)?;
        }
        if let Some(ref keywords) = bundle.keywords {
            job_keywords::insert_many(&tx, snapshot_id, &keywords.jobs)?;
        }

        tx.commit().map_err(sqlite_err)?;
        tracing::info!(snapshot_id, "analysis bundle persisted");
        Ok(snapshot_id)
    })
}

/// Load a bundle by snapshot id.
pub fn load_bundle(db: &Database, snapshot_id: i64) -> Result<AnalysisBundle, StorageError> {
    let json = db.with_conn(|conn| snapshots::load_json(conn, snapshot_id))?;
    parse_bundle(&json)
}

/// Load the most recent bundle, if any run has been persisted.
pub fn load_latest_bundle(db: &Database) -> Result<Option<AnalysisBundle>, StorageError> {
    let latest = db.with_conn(snapshots::load_latest_json)?;
    match latest {
        Some((_, json)) => Ok(Some(parse_bundle(&json)?)),
        None => Ok(None),
    }
}

fn parse_bundle(json: &str) -> Result<AnalysisBundle, StorageError> {
    serde_json::from_str(json).map_err(|e| StorageError::Sqlite {
        message: format!("bundle deserialization: {e}"),
    })
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
