//! `prism report` — re-render from a stored snapshot.

use prism_core::config::PrismConfig;
use prism_core::errors::{PipelineError, StorageError};
use prism_report::site;
use prism_storage::{load_bundle, load_latest_bundle, Database};

pub fn execute(config: &PrismConfig, snapshot: Option<i64>) -> Result<(), PipelineError> {
    let db = Database::open(&config.storage.effective_db_path())?;

    let bundle = match snapshot {
        Some(id) => load_bundle(&db, id)?,
        None => load_latest_bundle(&db)?.ok_or(StorageError::NotFound {
            what: "any analysis snapshot; run `prism run` first".to_string(),
        })?,
    };

    let written = site::assemble(&bundle, &config.report)?;
    tracing::info!(files = written.len(), "reports rendered from snapshot");
    Ok(())
}
