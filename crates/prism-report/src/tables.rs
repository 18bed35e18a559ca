//! CSV table export — the frequency and summary tables, one file each.

use std::path::{Path, PathBuf};

use prism_analysis::pipeline::AnalysisBundle;
use prism_core::errors::ReportError;

/// Write every table the bundle carries into `dir/tables/`.
/// Returns the written paths (relative file names under the output dir).
pub fn export_tables(bundle: &AnalysisBundle, dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let tables_dir = dir.join("tables");
    std::fs::create_dir_all(&tables_dir).map_err(|e| io_err(&tables_dir, e))?;

    let mut written = Vec::new();

    // Vocabulary tables.
    write_csv(
        &tables_dir.join("phrase_frequency.csv"),
        &["phrase", "english", "frequency"],
        bundle.vocabulary.top_phrases.iter().map(|p| {
            vec![
                p.value.clone(),
                p.gloss.clone().unwrap_or_default(),
                p.count.to_string(),
            ]
        }),
        &mut written,
    )?;
    write_csv(
        &tables_dir.join("job_name_frequency.csv"),
        &["job_name", "english", "frequency"],
        bundle.vocabulary.top_job_names.iter().map(|p| {
            vec![
                p.value.clone(),
                p.gloss.clone().unwrap_or_default(),
                p.count.to_string(),
            ]
        }),
        &mut written,
    )?;
    write_csv(
        &tables_dir.join("concept_words_frequency.csv"),
        &["concept_word", "frequency"],
        bundle
            .vocabulary
            .concept_mentions
            .iter()
            .map(|e| vec![e.value.clone(), e.count.to_string()]),
        &mut written,
    )?;
    write_csv(
        &tables_dir.join("language_distribution.csv"),
        &["language", "count"],
        bundle
            .vocabulary
            .language_distribution
            .iter()
            .map(|e| vec![e.value.clone(), e.count.to_string()]),
        &mut written,
    )?;

    // Pattern tables.
    for field in &bundle.patterns.fields {
        write_csv(
            &tables_dir.join(format!("{}_frequency.csv", field.field)),
            &["value", "frequency", "percentage"],
            field.entries.iter().map(|e| {
                vec![
                    e.value.clone(),
                    e.count.to_string(),
                    format!("{:.1}", e.pct),
                ]
            }),
            &mut written,
        )?;
    }
    for combo in &bundle.patterns.combos {
        write_csv(
            &tables_dir.join(format!("{}_combinations.csv", file_slug(&combo.kind))),
            &["combination", "frequency", "percentage"],
            combo.entries.iter().map(|e| {
                vec![
                    e.value.clone(),
                    e.count.to_string(),
                    format!("{:.1}", e.pct),
                ]
            }),
            &mut written,
        )?;
    }
    write_csv(
        &tables_dir.join("numeric_statistics.csv"),
        &["metric", "count", "mean", "median", "min", "max"],
        bundle.patterns.numeric.iter().map(|s| {
            vec![
                s.metric.clone(),
                s.count.to_string(),
                format!("{:.2}", s.mean),
                format!("{:.2}", s.median),
                format!("{:.2}", s.min),
                format!("{:.2}", s.max),
            ]
        }),
        &mut written,
    )?;
    write_csv(
        &tables_dir.join("outliers.csv"),
        &["metric", "job_id", "value", "lower_fence", "upper_fence"],
        bundle.patterns.outliers.iter().map(|o| {
            vec![
                o.metric.clone(),
                o.job_id.to_string(),
                format!("{:.2}", o.value),
                format!("{:.2}", o.lower_fence),
                format!("{:.2}", o.upper_fence),
            ]
        }),
        &mut written,
    )?;
    write_csv(
        &tables_dir.join("monthly_trend.csv"),
        &["month", "jobs"],
        bundle
            .patterns
            .monthly
            .iter()
            .map(|m| vec![m.month.clone(), m.jobs.to_string()]),
        &mut written,
    )?;

    // VOC tables.
    if let Some(ref voc) = bundle.voc {
        write_csv(
            &tables_dir.join("theme_summary.csv"),
            &["theme", "entry_count", "share_pct", "sentence_count"],
            voc.theme_summaries.iter().map(|t| {
                vec![
                    t.theme.clone(),
                    t.entry_count.to_string(),
                    format!("{:.1}", t.share_pct),
                    t.sentence_count.to_string(),
                ]
            }),
            &mut written,
        )?;
        write_csv(
            &tables_dir.join("theme_sentences.csv"),
            &["theme", "category", "user_type", "sentence"],
            voc.theme_summaries.iter().flat_map(|t| {
                t.samples.iter().map(|s| {
                    vec![
                        t.theme.clone(),
                        s.category.clone(),
                        s.user_type.clone(),
                        s.sentence.clone(),
                    ]
                })
            }),
            &mut written,
        )?;
    }

    // Keyword tables.
    if let Some(ref keywords) = bundle.keywords {
        write_csv(
            &tables_dir.join("keywords_summary.csv"),
            &[
                "job_id",
                "brand_name",
                "job_name",
                "job_keywords",
                "model_keywords",
                "num_models",
            ],
            keywords.jobs.iter().map(|j| {
                vec![
                    j.job_id.to_string(),
                    j.brand_name.clone(),
                    j.job_name.clone(),
                    j.job_keywords.join(", "),
                    j.model_keywords.join(", "),
                    j.num_models.to_string(),
                ]
            }),
            &mut written,
        )?;
    }

    tracing::debug!(tables = written.len(), "CSV tables exported");
    Ok(written)
}

fn write_csv(
    path: &Path,
    headers: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
    written: &mut Vec<PathBuf>,
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| ReportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    writer
        .write_record(headers)
        .map_err(|e| csv_err(path, e))?;
    for row in rows {
        writer.write_record(&row).map_err(|e| csv_err(path, e))?;
    }
    writer.flush().map_err(|e| io_err(path, e))?;

    written.push(path.to_path_buf());
    Ok(())
}

fn file_slug(kind: &str) -> String {
    kind.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn io_err(path: &Path, e: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

fn csv_err(path: &Path, e: csv::Error) -> ReportError {
    ReportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_flattens_separators() {
        assert_eq!(file_slug("shoot_type + location"), "shoot_type_location");
        assert_eq!(file_slug("location + usage"), "location_usage");
    }
}
