//! The pipeline runner.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use prism_core::config::{AnalysisConfig, IngestConfig};
use prism_core::errors::{AnalysisError, IngestError, PipelineReport};
use prism_core::events::{
    EventDispatcher, PrismEventHandler, RunCompleteEvent, Stage, StageFinishedEvent,
    StageSkippedEvent, StageStartedEvent,
};

use crate::ingest::{self, Dataset};
use crate::{keywords, patterns, text, voc};

use super::types::{AnalysisBundle, DatasetSummary};

/// Orchestrates ingest and analysis.
///
/// Storage and rendering stay outside: the runner produces an
/// `AnalysisBundle`; callers decide what to do with it.
pub struct Pipeline {
    config: AnalysisConfig,
    dispatcher: EventDispatcher,
}

impl Pipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Register a progress event handler.
    pub fn with_handler(mut self, handler: Arc<dyn PrismEventHandler>) -> Self {
        self.dispatcher.register(handler);
        self
    }

    /// Load all datasets. The bookings export is required; the others are
    /// optional and their absence only skips the dependent analyses.
    pub fn load(&self, ingest_config: &IngestConfig) -> Result<PipelineReport<Dataset>, IngestError> {
        let started = Instant::now();
        self.dispatcher.emit_stage_started(&StageStartedEvent {
            stage: Stage::Ingest,
            items: None,
        });

        let mut report: PipelineReport<Dataset> = PipelineReport::default();

        let bookings = ingest::load_bookings(&ingest_config.bookings_path())?;
        report.data.bookings = report.absorb(bookings);
        report.data.jobs = ingest::group_jobs(&report.data.bookings);

        report.data.voc = self.load_optional(&mut report, "voc", || {
            ingest::load_voc(&ingest_config.voc_path())
        });
        report.data.style_tags = self.load_optional(&mut report, "style tags", || {
            ingest::load_style_tags(&ingest_config.style_tags_path())
        });
        report.data.profiles = self.load_optional(&mut report, "model profiles", || {
            ingest::load_profiles(&ingest_config.profiles_path())
        });

        self.dispatcher.emit_stage_finished(&StageFinishedEvent {
            stage: Stage::Ingest,
            items: report.data.bookings.len(),
            duration_ms: started.elapsed().as_millis() as u64,
        });

        tracing::info!(
            bookings = report.data.bookings.len(),
            jobs = report.data.jobs.len(),
            voc = report.data.voc.len(),
            row_errors = report.error_count(),
            "datasets loaded"
        );
        Ok(report)
    }

    /// A missing optional dataset is a skip, not an error; row-level errors
    /// still accumulate.
    fn load_optional<T: Default>(
        &self,
        report: &mut PipelineReport<Dataset>,
        label: &str,
        load: impl FnOnce() -> Result<PipelineReport<Vec<T>>, IngestError>,
    ) -> Vec<T> {
        match load() {
            Ok(inner) => report.absorb(inner),
            Err(IngestError::FileNotFound { path }) => {
                tracing::debug!(dataset = label, path, "optional dataset absent");
                Vec::new()
            }
            Err(e) => {
                report.add_error(e);
                Vec::new()
            }
        }
    }

    /// Run every analyzer over a loaded dataset.
    pub fn analyze(&self, dataset: &Dataset) -> PipelineReport<AnalysisBundle> {
        let run_started = Instant::now();
        let mut report: PipelineReport<AnalysisBundle> = PipelineReport::default();

        if dataset.jobs.is_empty() {
            report.add_error(AnalysisError::EmptyDataset {
                name: "bookings".to_string(),
            });
        }

        report.data.generated_at = Utc::now().to_rfc3339();
        report.data.summary = DatasetSummary::compute(dataset);
        report.data.jobs = dataset.jobs.clone();

        report.data.vocabulary = self.timed(Stage::Vocabulary, dataset.jobs.len(), || {
            text::analyze_vocabulary(&dataset.jobs, &self.config)
        });

        report.data.patterns = self.timed(Stage::Patterns, dataset.jobs.len(), || {
            patterns::analyze(&dataset.jobs, &self.config)
        });

        report.data.voc = if dataset.has_voc() {
            Some(self.timed(Stage::Voc, dataset.voc.len(), || {
                voc::analyze(&dataset.voc, &self.config)
            }))
        } else {
            self.dispatcher.emit_stage_skipped(&StageSkippedEvent {
                stage: Stage::Voc,
                reason: "no VOC dataset".to_string(),
            });
            None
        };

        report.data.keywords = if dataset.has_model_data() {
            Some(self.timed(Stage::Keywords, dataset.jobs.len(), || {
                keywords::analyze(
                    &dataset.jobs,
                    &dataset.style_tags,
                    &dataset.profiles,
                    &self.config,
                )
            }))
        } else {
            self.dispatcher.emit_stage_skipped(&StageSkippedEvent {
                stage: Stage::Keywords,
                reason: "no style tag or profile datasets".to_string(),
            });
            None
        };

        self.dispatcher.emit_run_complete(&RunCompleteEvent {
            total_bookings: dataset.bookings.len(),
            unique_jobs: dataset.jobs.len(),
            error_count: report.error_count(),
            duration_ms: run_started.elapsed().as_millis() as u64,
        });

        report
    }

    /// Load and analyze in one step.
    pub fn run(
        &self,
        ingest_config: &IngestConfig,
    ) -> Result<PipelineReport<AnalysisBundle>, IngestError> {
        let loaded = self.load(ingest_config)?;
        let dataset = loaded.data;
        let mut report = self.analyze(&dataset);
        report.errors.splice(0..0, loaded.errors);
        Ok(report)
    }

    fn timed<T>(&self, stage: Stage, items: usize, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        self.dispatcher.emit_stage_started(&StageStartedEvent {
            stage,
            items: Some(items),
        });

        let result = f();

        let duration_ms = started.elapsed().as_millis() as u64;
        self.dispatcher.emit_stage_finished(&StageFinishedEvent {
            stage,
            items,
            duration_ms,
        });
        tracing::debug!(stage = stage.name(), duration_ms, "stage finished");

        result
    }
}
