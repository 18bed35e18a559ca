//! `prism history` — recent pipeline runs.

use chrono::DateTime;

use prism_core::config::PrismConfig;
use prism_core::errors::PipelineError;
use prism_storage::queries::run_history;
use prism_storage::Database;

pub fn execute(config: &PrismConfig, limit: usize) -> Result<(), PipelineError> {
    let db = Database::open(&config.storage.effective_db_path())?;
    let runs = db.with_conn(|conn| run_history::query_recent(conn, limit))?;

    if runs.is_empty() {
        println!("no runs recorded yet");
        return Ok(());
    }

    println!(
        "{:<5} {:<20} {:<10} {:>9} {:>6} {:>7} {:>9}",
        "id", "started", "status", "bookings", "jobs", "errors", "duration"
    );
    for run in runs {
        println!(
            "{:<5} {:<20} {:<10} {:>9} {:>6} {:>7} {:>9}",
            run.id,
            format_time(run.started_at),
            run.status,
            format_opt(run.total_bookings),
            format_opt(run.unique_jobs),
            format_opt(run.row_errors),
            run.duration_ms
                .map(|ms| format!("{ms}ms"))
                .unwrap_or_else(|| "—".to_string()),
        );
        if let Some(error) = run.error {
            println!("      error: {error}");
        }
    }
    Ok(())
}

fn format_time(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| unix_secs.to_string())
}

fn format_opt(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}
