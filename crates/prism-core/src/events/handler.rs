//! Event handler trait with no-op defaults.

use super::types::*;

/// Receives pipeline lifecycle events.
///
/// All methods default to no-ops so handlers implement only what they need.
pub trait PrismEventHandler: Send + Sync {
    fn on_stage_started(&self, _event: &StageStartedEvent) {}
    fn on_stage_finished(&self, _event: &StageFinishedEvent) {}
    fn on_stage_skipped(&self, _event: &StageSkippedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}
