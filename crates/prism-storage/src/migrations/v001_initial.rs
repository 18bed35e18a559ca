//! V001: run log and snapshot artifact tables.

pub const MIGRATION_SQL: &str = r#"
-- Run history: append-only log of pipeline invocations.
CREATE TABLE IF NOT EXISTS run_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    started_at INTEGER NOT NULL,
    completed_at INTEGER,
    data_dir TEXT NOT NULL,
    total_bookings INTEGER,
    unique_jobs INTEGER,
    voc_entries INTEGER,
    row_errors INTEGER,
    duration_ms INTEGER,
    status TEXT NOT NULL DEFAULT 'running',
    error TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_run_history_time
    ON run_history(started_at DESC);

-- Snapshots: one full analysis bundle per completed run, as JSON.
-- Same idea as a parse cache: the artifact is the source of truth for
-- re-rendering; the normalized tables exist for SQL browsing.
CREATE TABLE IF NOT EXISTS snapshots (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id INTEGER REFERENCES run_history(id),
    generated_at TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    bundle_json TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_snapshots_created
    ON snapshots(created_at DESC);
"#;
