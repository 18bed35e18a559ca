//! Dataset location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the CSV exports live. All fields optional; unset fields fall back
/// to compiled defaults via the `effective_*` accessors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IngestConfig {
    /// Directory holding the dataset files.
    pub data_dir: Option<PathBuf>,
    pub bookings_file: Option<String>,
    pub voc_file: Option<String>,
    pub style_tags_file: Option<String>,
    pub profiles_file: Option<String>,
}

impl IngestConfig {
    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn bookings_path(&self) -> PathBuf {
        self.effective_data_dir()
            .join(self.bookings_file.as_deref().unwrap_or("bookings.csv"))
    }

    pub fn voc_path(&self) -> PathBuf {
        self.effective_data_dir()
            .join(self.voc_file.as_deref().unwrap_or("voc.csv"))
    }

    pub fn style_tags_path(&self) -> PathBuf {
        self.effective_data_dir()
            .join(self.style_tags_file.as_deref().unwrap_or("style_tags.csv"))
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.effective_data_dir()
            .join(self.profiles_file.as_deref().unwrap_or("model_profiles.csv"))
    }
}
