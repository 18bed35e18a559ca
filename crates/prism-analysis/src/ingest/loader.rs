//! CSV loaders for the four dataset files.
//!
//! Each loader deserializes into a raw row struct mirroring the export
//! headers, then shapes it into the shared record types. A row that fails
//! to deserialize or carries an unusable id is skipped and recorded as a
//! non-fatal `IngestError::Row`.

use std::path::Path;

use serde::Deserialize;

use prism_core::errors::{IngestError, PipelineReport};
use prism_core::types::{BookingRecord, ModelProfileRecord, StyleTagRecord, VocRecord};

use super::array_field::{parse_array_field, parse_url_array_field};

/// Raw booking row as exported. Numeric ids arrive as text because the
/// upstream export renders some of them as floats (`1234.0`).
#[derive(Debug, Deserialize)]
struct RawBookingRow {
    job_id: Option<String>,
    talent_id: Option<String>,
    client_id: Option<String>,
    #[serde(default)]
    brand_name: String,
    #[serde(default)]
    job_name: String,
    #[serde(default)]
    inquiry_text: String,
    #[serde(default)]
    shoot_types: String,
    #[serde(default)]
    shoot_locations: String,
    #[serde(default)]
    shoot_details: String,
    #[serde(default)]
    usages: String,
    #[serde(default)]
    extra_needs: String,
    #[serde(rename = "copyright")]
    copyright_months: Option<f64>,
    shoot_hours: Option<f64>,
    #[serde(default)]
    region: String,
    #[serde(default)]
    talent_name: String,
    #[serde(default)]
    talent_nationality: String,
    price_client: Option<f64>,
    price_talent: Option<f64>,
    #[serde(default)]
    start_date_time: String,
    headshot: Option<String>,
    #[serde(default)]
    thumbnails: String,
    #[serde(default)]
    concept_photos: String,
}

#[derive(Debug, Deserialize)]
struct RawVocRow {
    #[serde(rename = "Categories", default)]
    category: String,
    #[serde(rename = "User Type", default)]
    user_type: String,
    #[serde(rename = "KOR", default)]
    korean: String,
    #[serde(rename = "ENG", default)]
    english: String,
}

#[derive(Debug, Deserialize)]
struct RawStyleTagRow {
    #[serde(rename = "talentId")]
    talent_id: Option<String>,
    #[serde(rename = "tagName", default)]
    tag_name: String,
}

#[derive(Debug, Deserialize)]
struct RawProfileRow {
    id: Option<String>,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    hair: String,
    #[serde(default)]
    eyes: String,
    height: Option<f64>,
}

/// Load the bookings export.
pub fn load_bookings(path: &Path) -> Result<PipelineReport<Vec<BookingRecord>>, IngestError> {
    let mut reader = open(path)?;
    let mut report = PipelineReport::new(Vec::new());

    for (idx, row) in reader.deserialize::<RawBookingRow>().enumerate() {
        let line = idx as u64 + 2; // 1-based, after the header
        match row {
            Ok(raw) => match shape_booking(raw) {
                Some(record) => report.data.push(record),
                None => report.add_error(IngestError::Row {
                    path: path.display().to_string(),
                    line,
                    message: "missing or unusable job_id".to_string(),
                }),
            },
            Err(e) => report.add_error(IngestError::Row {
                path: path.display().to_string(),
                line,
                message: e.to_string(),
            }),
        }
    }

    tracing::debug!(
        rows = report.data.len(),
        skipped = report.error_count(),
        "loaded bookings"
    );
    Ok(report)
}

/// Load the voice-of-customer export.
pub fn load_voc(path: &Path) -> Result<PipelineReport<Vec<VocRecord>>, IngestError> {
    let mut reader = open(path)?;
    let mut report = PipelineReport::new(Vec::new());

    for (idx, row) in reader.deserialize::<RawVocRow>().enumerate() {
        match row {
            Ok(raw) => {
                // Entries with no feedback text in either language carry nothing.
                if raw.korean.trim().is_empty() && raw.english.trim().is_empty() {
                    continue;
                }
                report.data.push(VocRecord {
                    category: raw.category.trim().to_string(),
                    user_type: raw.user_type.trim().to_string(),
                    korean: raw.korean.trim().to_string(),
                    english: raw.english.trim().to_string(),
                });
            }
            Err(e) => report.add_error(IngestError::Row {
                path: path.display().to_string(),
                line: idx as u64 + 2,
                message: e.to_string(),
            }),
        }
    }

    Ok(report)
}

/// Load the style tags export.
pub fn load_style_tags(path: &Path) -> Result<PipelineReport<Vec<StyleTagRecord>>, IngestError> {
    let mut reader = open(path)?;
    let mut report = PipelineReport::new(Vec::new());

    for (idx, row) in reader.deserialize::<RawStyleTagRow>().enumerate() {
        let line = idx as u64 + 2;
        match row {
            Ok(raw) => match raw.talent_id.as_deref().and_then(parse_id) {
                Some(talent_id) if !raw.tag_name.trim().is_empty() => {
                    report.data.push(StyleTagRecord {
                        talent_id,
                        tag_name: raw.tag_name.trim().to_string(),
                    });
                }
                _ => report.add_error(IngestError::Row {
                    path: path.display().to_string(),
                    line,
                    message: "missing talentId or tagName".to_string(),
                }),
            },
            Err(e) => report.add_error(IngestError::Row {
                path: path.display().to_string(),
                line,
                message: e.to_string(),
            }),
        }
    }

    Ok(report)
}

/// Load the model profiles export.
pub fn load_profiles(path: &Path) -> Result<PipelineReport<Vec<ModelProfileRecord>>, IngestError> {
    let mut reader = open(path)?;
    let mut report = PipelineReport::new(Vec::new());

    for (idx, row) in reader.deserialize::<RawProfileRow>().enumerate() {
        let line = idx as u64 + 2;
        match row {
            Ok(raw) => match raw.id.as_deref().and_then(parse_id) {
                Some(id) => report.data.push(ModelProfileRecord {
                    id,
                    gender: raw.gender.trim().to_string(),
                    hair: raw.hair.trim().to_string(),
                    eyes: raw.eyes.trim().to_string(),
                    height: raw.height,
                }),
                None => report.add_error(IngestError::Row {
                    path: path.display().to_string(),
                    line,
                    message: "missing profile id".to_string(),
                }),
            },
            Err(e) => report.add_error(IngestError::Row {
                path: path.display().to_string(),
                line,
                message: e.to_string(),
            }),
        }
    }

    Ok(report)
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    csv::ReaderBuilder::new()
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| IngestError::Csv {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn shape_booking(raw: RawBookingRow) -> Option<BookingRecord> {
    let job_id = raw.job_id.as_deref().and_then(parse_id)?;
    Some(BookingRecord {
        job_id,
        talent_id: raw.talent_id.as_deref().and_then(parse_id),
        client_id: raw.client_id.as_deref().and_then(parse_id),
        brand_name: raw.brand_name.trim().to_string(),
        job_name: raw.job_name.trim().to_string(),
        inquiry_text: raw.inquiry_text.trim().to_string(),
        shoot_types: parse_array_field(&raw.shoot_types),
        shoot_locations: parse_array_field(&raw.shoot_locations),
        shoot_details: parse_array_field(&raw.shoot_details),
        usages: parse_array_field(&raw.usages),
        extra_needs: parse_array_field(&raw.extra_needs),
        copyright_months: raw.copyright_months,
        shoot_hours: raw.shoot_hours,
        region: raw.region.trim().to_string(),
        talent_name: raw.talent_name.trim().to_string(),
        talent_nationality: raw.talent_nationality.trim().to_string(),
        price_client: raw.price_client,
        price_talent: raw.price_talent,
        start_date_time: raw.start_date_time.trim().to_string(),
        headshot: raw.headshot.filter(|h| !h.trim().is_empty()),
        thumbnails: parse_url_array_field(&raw.thumbnails),
        concept_photos: parse_url_array_field(&raw.concept_photos),
    })
}

/// Lenient id parsing: accepts `1234` and the export's float renditions
/// (`1234.0`). Anything else is unusable.
fn parse_id(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as i64)
}
