//! Pipeline progress logged through tracing.

use prism_core::events::{
    ErrorEvent, PrismEventHandler, RunCompleteEvent, StageFinishedEvent, StageSkippedEvent,
    StageStartedEvent,
};

/// Logs every pipeline event at the appropriate level.
pub struct LogProgress;

impl PrismEventHandler for LogProgress {
    fn on_stage_started(&self, event: &StageStartedEvent) {
        match event.items {
            Some(items) => tracing::info!(stage = event.stage.name(), items, "stage started"),
            None => tracing::info!(stage = event.stage.name(), "stage started"),
        }
    }

    fn on_stage_finished(&self, event: &StageFinishedEvent) {
        tracing::info!(
            stage = event.stage.name(),
            items = event.items,
            duration_ms = event.duration_ms,
            "stage finished"
        );
    }

    fn on_stage_skipped(&self, event: &StageSkippedEvent) {
        tracing::info!(stage = event.stage.name(), reason = %event.reason, "stage skipped");
    }

    fn on_run_complete(&self, event: &RunCompleteEvent) {
        tracing::info!(
            bookings = event.total_bookings,
            jobs = event.unique_jobs,
            errors = event.error_count,
            duration_ms = event.duration_ms,
            "analysis complete"
        );
    }

    fn on_error(&self, event: &ErrorEvent) {
        tracing::warn!(stage = event.stage.name(), message = %event.message, "pipeline error");
    }
}
