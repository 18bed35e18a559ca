//! Report output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory the rendered pages and tables are written to.
    pub out_dir: Option<PathBuf>,
    /// Title shown on report covers and page headers.
    pub title: Option<String>,
    /// Document formats to render (`html`, `markdown`, `json`).
    pub formats: Vec<String>,
    /// Assemble the static site (index + per-analysis pages).
    pub site: Option<bool>,
    /// How many jobs the visual dashboard page lists.
    pub dashboard_rows: Option<usize>,
}

impl ReportConfig {
    pub fn effective_out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| PathBuf::from("outputs"))
    }

    pub fn effective_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| "Booking Analytics Report".to_string())
    }

    pub fn effective_formats(&self) -> Vec<String> {
        if self.formats.is_empty() {
            vec!["html".into(), "markdown".into(), "json".into()]
        } else {
            self.formats.clone()
        }
    }

    pub fn effective_site(&self) -> bool {
        self.site.unwrap_or(true)
    }

    pub fn effective_dashboard_rows(&self) -> usize {
        self.dashboard_rows.unwrap_or(50)
    }
}
