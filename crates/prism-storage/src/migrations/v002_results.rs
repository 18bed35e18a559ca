//! V002: normalized analysis result tables.

pub const MIGRATION_SQL: &str = r#"
-- Frequency tables of every family: field values, phrases, job names,
-- combinations, languages, concept words, monthly trend.
CREATE TABLE IF NOT EXISTS frequencies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    snapshot_id INTEGER NOT NULL REFERENCES snapshots(id),
    family TEXT NOT NULL,
    value TEXT NOT NULL,
    gloss TEXT,
    count INTEGER NOT NULL,
    pct REAL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_frequencies_family
    ON frequencies(snapshot_id, family, count DESC);

-- Numeric column summaries.
CREATE TABLE IF NOT EXISTS numeric_summaries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    snapshot_id INTEGER NOT NULL REFERENCES snapshots(id),
    metric TEXT NOT NULL,
    count INTEGER NOT NULL,
    mean REAL NOT NULL,
    median REAL NOT NULL,
    min REAL NOT NULL,
    max REAL NOT NULL
) STRICT;

-- Jobs flagged by the fence test.
CREATE TABLE IF NOT EXISTS outliers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    snapshot_id INTEGER NOT NULL REFERENCES snapshots(id),
    metric TEXT NOT NULL,
    job_id INTEGER NOT NULL,
    value REAL NOT NULL,
    lower_fence REAL NOT NULL,
    upper_fence REAL NOT NULL
) STRICT;

-- VOC theme rollup.
CREATE TABLE IF NOT EXISTS voc_themes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    snapshot_id INTEGER NOT NULL REFERENCES snapshots(id),
    theme TEXT NOT NULL,
    entry_count INTEGER NOT NULL,
    share_pct REAL NOT NULL,
    sentence_count INTEGER NOT NULL
) STRICT;

-- Per-job extracted keywords (comma-joined, as exported).
CREATE TABLE IF NOT EXISTS job_keywords (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    snapshot_id INTEGER NOT NULL REFERENCES snapshots(id),
    job_id INTEGER NOT NULL,
    brand_name TEXT NOT NULL,
    job_name TEXT NOT NULL,
    job_keywords TEXT NOT NULL,
    model_keywords TEXT NOT NULL,
    num_models INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_job_keywords_job
    ON job_keywords(snapshot_id, job_id);
"#;
