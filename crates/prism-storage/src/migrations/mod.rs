//! Versioned, idempotent schema migrations.

pub mod v001_initial;
pub mod v002_results;

use rusqlite::Connection;

use prism_core::errors::StorageError;

const MIGRATIONS: &[(u32, &str)] = &[
    (1, v001_initial::MIGRATION_SQL),
    (2, v002_results::MIGRATION_SQL),
];

/// Run all pending migrations. Safe to call on every open.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL
        ) STRICT;",
    )
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })?;

    for &(version, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch(sql)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                message: e.to_string(),
            })?;

        conn.execute(
            "INSERT INTO schema_version (version, applied_at) VALUES (?1, unixepoch())",
            [version],
        )
        .map_err(|e| StorageError::MigrationFailed {
            version,
            message: e.to_string(),
        })?;

        tracing::debug!(version, "migration applied");
    }

    Ok(())
}

/// The highest applied schema version, or 0 for a fresh database.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get::<_, u32>(0),
    )
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })
}

fn is_applied(conn: &Connection, version: u32) -> Result<bool, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM schema_version WHERE version = ?1",
        [version],
        |row| row.get::<_, i64>(0),
    )
    .map(|count| count > 0)
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })
}
