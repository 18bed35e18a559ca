//! `prism run` — the full pipeline.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use prism_analysis::Pipeline;
use prism_core::config::PrismConfig;
use prism_core::errors::PipelineError;
use prism_report::site;
use prism_storage::queries::run_history;
use prism_storage::{save_bundle, Database};

use crate::progress::LogProgress;

pub fn execute(config: &PrismConfig) -> Result<(), PipelineError> {
    let started = Instant::now();
    let db = Database::open(&config.storage.effective_db_path())?;

    let data_dir = config.ingest.effective_data_dir().display().to_string();
    let run_id = db.with_conn(|conn| run_history::insert_run_start(conn, unix_now(), &data_dir))?;

    let pipeline = Pipeline::new(config.analysis.clone()).with_handler(Arc::new(LogProgress));

    let outcome = run_pipeline(&pipeline, config, &db, run_id);
    let duration_ms = started.elapsed().as_millis() as i64;

    match outcome {
        Ok(stats) => {
            db.with_conn(|conn| {
                run_history::update_run_complete(
                    conn,
                    run_id,
                    unix_now(),
                    stats.total_bookings,
                    stats.unique_jobs,
                    stats.voc_entries,
                    stats.row_errors,
                    duration_ms,
                    "completed",
                    None,
                )
            })?;
            db.checkpoint()?;
            tracing::info!(
                out_dir = %config.report.effective_out_dir().display(),
                "run complete"
            );
            Ok(())
        }
        Err(e) => {
            let message = e.to_string();
            db.with_conn(|conn| {
                run_history::update_run_complete(
                    conn, run_id, unix_now(), 0, 0, 0, 0, duration_ms, "failed",
                    Some(&message),
                )
            })?;
            Err(e)
        }
    }
}

struct RunStats {
    total_bookings: i64,
    unique_jobs: i64,
    voc_entries: i64,
    row_errors: i64,
}

fn run_pipeline(
    pipeline: &Pipeline,
    config: &PrismConfig,
    db: &Database,
    run_id: i64,
) -> Result<RunStats, PipelineError> {
    let report = pipeline.run(&config.ingest)?;

    for error in &report.errors {
        tracing::warn!(%error, "non-fatal pipeline error");
    }

    let bundle = &report.data;
    let voc_entries = bundle.voc.as_ref().map(|v| v.entry_count).unwrap_or(0);

    save_bundle(db, Some(run_id), bundle)?;

    if config.report.effective_site() {
        site::assemble(bundle, &config.report)?;
    } else {
        render_documents_only(bundle, config)?;
    }

    Ok(RunStats {
        total_bookings: bundle.summary.total_bookings as i64,
        unique_jobs: bundle.summary.unique_jobs as i64,
        voc_entries: voc_entries as i64,
        row_errors: report.error_count() as i64,
    })
}

/// `--no-site`: write only the consolidated documents.
fn render_documents_only(
    bundle: &prism_analysis::AnalysisBundle,
    config: &PrismConfig,
) -> Result<(), PipelineError> {
    let out_dir = config.report.effective_out_dir();
    std::fs::create_dir_all(&out_dir).map_err(|e| {
        PipelineError::Report(prism_core::errors::ReportError::Io {
            path: out_dir.display().to_string(),
            message: e.to_string(),
        })
    })?;

    let title = config.report.effective_title();
    for format in config.report.effective_formats() {
        let reporter = prism_report::create_reporter(&format, &title).ok_or(
            prism_core::errors::ReportError::UnknownFormat { format },
        )?;
        let content = reporter.generate(bundle)?;
        let path = out_dir.join(reporter.file_name());
        std::fs::write(&path, content).map_err(|e| {
            PipelineError::Report(prism_core::errors::ReportError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
    }
    Ok(())
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
