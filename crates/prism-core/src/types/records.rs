//! Record types for the four ingested datasets.
//!
//! Multi-value cells (`shoot_types`, `usages`, photo columns) arrive from the
//! export as Postgres-style `{a,b}` arrays; the ingest layer parses them into
//! the `Vec<String>` fields here. Numeric cells that can be blank are Options.

use serde::{Deserialize, Serialize};

/// One booking row: a talent booked on a job.
/// Several bookings share a `job_id` when a job books multiple models.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRecord {
    pub job_id: i64,
    pub talent_id: Option<i64>,
    pub client_id: Option<i64>,
    pub brand_name: String,
    pub job_name: String,
    pub inquiry_text: String,
    pub shoot_types: Vec<String>,
    pub shoot_locations: Vec<String>,
    pub shoot_details: Vec<String>,
    pub usages: Vec<String>,
    pub extra_needs: Vec<String>,
    pub copyright_months: Option<f64>,
    pub shoot_hours: Option<f64>,
    pub region: String,
    pub talent_name: String,
    pub talent_nationality: String,
    pub price_client: Option<f64>,
    pub price_talent: Option<f64>,
    pub start_date_time: String,
    pub headshot: Option<String>,
    pub thumbnails: Vec<String>,
    pub concept_photos: Vec<String>,
}

/// A job: all bookings sharing one `job_id`.
/// Job-level fields are read from the first booking; the full booking list
/// is retained for talent-level analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub job_id: i64,
    pub bookings: Vec<BookingRecord>,
}

impl Job {
    /// The representative booking for job-level fields.
    pub fn first(&self) -> &BookingRecord {
        // Construction guarantees at least one booking per job.
        &self.bookings[0]
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }
}

/// One voice-of-customer feedback entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocRecord {
    pub category: String,
    pub user_type: String,
    /// Original Korean feedback text.
    pub korean: String,
    /// English rendition, when the export carries one.
    pub english: String,
}

/// One style tag attached to a model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleTagRecord {
    pub talent_id: i64,
    pub tag_name: String,
}

/// A model profile row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelProfileRecord {
    pub id: i64,
    pub gender: String,
    pub hair: String,
    pub eyes: String,
    pub height: Option<f64>,
}
