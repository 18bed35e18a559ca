//! Tests for run_history lifecycle: insert, update, query, count.

use prism_storage::queries::run_history::*;
use prism_storage::Database;

#[test]
fn run_start_and_complete_roundtrip() {
    let db = Database::open_in_memory().unwrap();

    db.with_conn(|conn| {
        let id = insert_run_start(conn, 1700000000, "data")?;
        assert!(id > 0);

        update_run_complete(
            conn, id, 1700000010, 900, 400, 60, 2, 10000, "completed", None,
        )?;

        let runs = query_recent(conn, 10)?;
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].id, id);
        assert_eq!(runs[0].data_dir, "data");
        assert_eq!(runs[0].status, "completed");
        assert_eq!(runs[0].total_bookings, Some(900));
        assert_eq!(runs[0].unique_jobs, Some(400));
        assert_eq!(runs[0].voc_entries, Some(60));
        assert_eq!(runs[0].row_errors, Some(2));
        assert!(runs[0].error.is_none());
        Ok(())
    })
    .unwrap();
}

#[test]
fn failed_run_records_error() {
    let db = Database::open_in_memory().unwrap();

    db.with_conn(|conn| {
        let id = insert_run_start(conn, 1700000000, "data")?;
        update_run_complete(
            conn,
            id,
            1700000005,
            0,
            0,
            0,
            0,
            5000,
            "failed",
            Some("bookings export missing"),
        )?;

        let runs = query_recent(conn, 10)?;
        assert_eq!(runs[0].status, "failed");
        assert_eq!(runs[0].error.as_deref(), Some("bookings export missing"));
        Ok(())
    })
    .unwrap();
}

#[test]
fn recent_runs_ordered_newest_first_with_limit() {
    let db = Database::open_in_memory().unwrap();

    db.with_conn(|conn| {
        for i in 0..5i64 {
            let id = insert_run_start(conn, 1700000000 + i * 100, "data")?;
            update_run_complete(conn, id, 1700000010 + i * 100, 1, 1, 0, 0, 100, "completed", None)?;
        }

        let runs = query_recent(conn, 2)?;
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].started_at, 1700000400);
        assert_eq!(runs[1].started_at, 1700000300);

        assert_eq!(count(conn)?, 5);
        Ok(())
    })
    .unwrap();
}
