//! Dataset ingest — CSV loading, array-cell parsing, job-level grouping.
//!
//! Loading is lenient: a malformed row is skipped and recorded as a
//! non-fatal error on the load report, so one bad export line never aborts
//! an analysis run.

pub mod array_field;
pub mod dedup;
pub mod loader;
pub mod types;

pub use array_field::{parse_array_field, parse_url_array_field};
pub use dedup::group_jobs;
pub use loader::{load_bookings, load_profiles, load_style_tags, load_voc};
pub use types::Dataset;
