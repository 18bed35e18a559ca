//! Static site assembly: every page and table under one output directory,
//! fronted by an index page.

use std::path::{Path, PathBuf};

use prism_analysis::pipeline::AnalysisBundle;
use prism_core::config::ReportConfig;
use prism_core::errors::ReportError;

use crate::formats::create_reporter;
use crate::html::pages;
use crate::tables;

/// Assemble the full site under `config.out_dir`.
/// Returns the paths written, index first.
pub fn assemble(bundle: &AnalysisBundle, config: &ReportConfig) -> Result<Vec<PathBuf>, ReportError> {
    let out_dir = config.effective_out_dir();
    std::fs::create_dir_all(&out_dir).map_err(|e| io_err(&out_dir, e))?;

    let title = config.effective_title();
    let mut written: Vec<PathBuf> = Vec::new();
    // (file name, description) pairs for the index.
    let mut index_entries: Vec<(String, String)> = Vec::new();

    // Per-analysis pages.
    write_page(
        &out_dir,
        "dashboard.html",
        pages::dashboard_page(bundle, config.effective_dashboard_rows()),
        "Job-by-job visual dashboard",
        &mut written,
        &mut index_entries,
    )?;
    write_page(
        &out_dir,
        "vocabulary.html",
        pages::vocabulary_page(bundle),
        "Text and vocabulary analysis",
        &mut written,
        &mut index_entries,
    )?;
    write_page(
        &out_dir,
        "patterns.html",
        pages::patterns_page(bundle),
        "Structured booking patterns",
        &mut written,
        &mut index_entries,
    )?;
    if let Some(html) = pages::voc_page(bundle) {
        write_page(
            &out_dir,
            "voc.html",
            html,
            "Voice-of-customer themes",
            &mut written,
            &mut index_entries,
        )?;
    }
    if let Some(html) = pages::keywords_page(bundle, config.effective_dashboard_rows()) {
        write_page(
            &out_dir,
            "keywords.html",
            html,
            "Heuristic keyword extraction",
            &mut written,
            &mut index_entries,
        )?;
    }

    // Consolidated documents in the configured formats.
    for format in config.effective_formats() {
        let reporter = create_reporter(&format, &title).ok_or(ReportError::UnknownFormat {
            format: format.clone(),
        })?;
        let content = reporter.generate(bundle)?;
        let path = out_dir.join(reporter.file_name());
        std::fs::write(&path, content).map_err(|e| io_err(&path, e))?;
        written.push(path);
        index_entries.push((
            reporter.file_name().to_string(),
            format!("Consolidated report ({})", reporter.name()),
        ));
    }

    // CSV tables.
    let table_paths = tables::export_tables(bundle, &out_dir)?;
    if !table_paths.is_empty() {
        index_entries.push((
            "tables/".to_string(),
            format!("{} CSV tables", table_paths.len()),
        ));
    }
    written.extend(table_paths);

    // The index page last, linking everything above.
    let index = pages::index_page(bundle, &title, &index_entries);
    let index_path = out_dir.join("index.html");
    std::fs::write(&index_path, index).map_err(|e| io_err(&index_path, e))?;
    written.insert(0, index_path);

    tracing::info!(
        files = written.len(),
        out_dir = %out_dir.display(),
        "site assembled"
    );
    Ok(written)
}

fn write_page(
    out_dir: &Path,
    file_name: &str,
    content: String,
    description: &str,
    written: &mut Vec<PathBuf>,
    index_entries: &mut Vec<(String, String)>,
) -> Result<(), ReportError> {
    let path = out_dir.join(file_name);
    std::fs::write(&path, content).map_err(|e| io_err(&path, e))?;
    written.push(path);
    index_entries.push((file_name.to_string(), description.to_string()));
    Ok(())
}

fn io_err(path: &Path, e: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
