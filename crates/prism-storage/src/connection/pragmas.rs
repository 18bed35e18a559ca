//! Connection pragmas.

use rusqlite::Connection;

use prism_core::errors::StorageError;

/// Apply the standard pragma set to a fresh connection.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })
}
