//! Top-level Prism configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, IngestConfig, ReportConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PRISM_*`)
/// 3. Project config (`prism.toml` in the working directory)
/// 4. User config (`~/.prism/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrismConfig {
    pub ingest: IngestConfig,
    pub analysis: AnalysisConfig,
    pub storage: StorageConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub top_phrases: Option<usize>,
    pub formats: Option<Vec<String>>,
    pub site: Option<bool>,
}

impl PrismConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("prism.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: PrismConfig = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PrismConfig) -> Result<(), ConfigError> {
        if let Some(multiplier) = config.analysis.outlier_multiplier {
            if multiplier <= 0.0 || !multiplier.is_finite() {
                return Err(ConfigError::Validation {
                    field: "analysis.outlier_multiplier".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(n) = config.analysis.top_phrases {
            if n == 0 {
                return Err(ConfigError::Validation {
                    field: "analysis.top_phrases".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(n) = config.analysis.min_token_len {
            if n == 0 {
                return Err(ConfigError::Validation {
                    field: "analysis.min_token_len".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PrismConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: PrismConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut PrismConfig, other: &PrismConfig) {
        // Ingest
        if other.ingest.data_dir.is_some() {
            base.ingest.data_dir = other.ingest.data_dir.clone();
        }
        if other.ingest.bookings_file.is_some() {
            base.ingest.bookings_file = other.ingest.bookings_file.clone();
        }
        if other.ingest.voc_file.is_some() {
            base.ingest.voc_file = other.ingest.voc_file.clone();
        }
        if other.ingest.style_tags_file.is_some() {
            base.ingest.style_tags_file = other.ingest.style_tags_file.clone();
        }
        if other.ingest.profiles_file.is_some() {
            base.ingest.profiles_file = other.ingest.profiles_file.clone();
        }

        // Analysis
        if other.analysis.top_phrases.is_some() {
            base.analysis.top_phrases = other.analysis.top_phrases;
        }
        if other.analysis.top_job_names.is_some() {
            base.analysis.top_job_names = other.analysis.top_job_names;
        }
        if other.analysis.top_combinations.is_some() {
            base.analysis.top_combinations = other.analysis.top_combinations;
        }
        if other.analysis.top_full_patterns.is_some() {
            base.analysis.top_full_patterns = other.analysis.top_full_patterns;
        }
        if other.analysis.top_model_keywords.is_some() {
            base.analysis.top_model_keywords = other.analysis.top_model_keywords;
        }
        if other.analysis.top_voc_phrases.is_some() {
            base.analysis.top_voc_phrases = other.analysis.top_voc_phrases;
        }
        if other.analysis.min_token_len.is_some() {
            base.analysis.min_token_len = other.analysis.min_token_len;
        }
        if other.analysis.outlier_multiplier.is_some() {
            base.analysis.outlier_multiplier = other.analysis.outlier_multiplier;
        }
        if other.analysis.representative_sentences.is_some() {
            base.analysis.representative_sentences = other.analysis.representative_sentences;
        }

        // Storage
        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }

        // Report
        if other.report.out_dir.is_some() {
            base.report.out_dir = other.report.out_dir.clone();
        }
        if other.report.title.is_some() {
            base.report.title = other.report.title.clone();
        }
        if !other.report.formats.is_empty() {
            base.report.formats = other.report.formats.clone();
        }
        if other.report.site.is_some() {
            base.report.site = other.report.site;
        }
        if other.report.dashboard_rows.is_some() {
            base.report.dashboard_rows = other.report.dashboard_rows;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PRISM_DATA_DIR`, `PRISM_TOP_PHRASES`, etc.
    fn apply_env_overrides(config: &mut PrismConfig) {
        if let Ok(val) = std::env::var("PRISM_DATA_DIR") {
            config.ingest.data_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PRISM_OUT_DIR") {
            config.report.out_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PRISM_DB_PATH") {
            config.storage.db_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PRISM_TOP_PHRASES") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.top_phrases = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PRISM_OUTLIER_MULTIPLIER") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.outlier_multiplier = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PRISM_REPORT_TITLE") {
            config.report.title = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PrismConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.data_dir {
            config.ingest.data_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.out_dir {
            config.report.out_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.db_path {
            config.storage.db_path = Some(v.clone());
        }
        if let Some(v) = cli.top_phrases {
            config.analysis.top_phrases = Some(v);
        }
        if let Some(ref v) = cli.formats {
            config.report.formats = v.clone();
        }
        if let Some(v) = cli.site {
            config.report.site = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user config path: `~/.prism/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".prism").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_applies_values() {
        let config = PrismConfig::from_toml(
            r#"
            [analysis]
            top_phrases = 10
            outlier_multiplier = 3.0

            [report]
            formats = ["html"]
            "#,
        )
        .unwrap();

        assert_eq!(config.analysis.effective_top_phrases(), 10);
        assert_eq!(config.analysis.effective_outlier_multiplier(), 3.0);
        assert_eq!(config.report.effective_formats(), vec!["html".to_string()]);
    }

    #[test]
    fn defaults_fill_unset_fields() {
        let config = PrismConfig::default();
        assert_eq!(config.analysis.effective_top_phrases(), 30);
        assert_eq!(config.analysis.effective_top_job_names(), 20);
        assert!(config.report.effective_site());
        assert_eq!(config.storage.effective_db_path(), PathBuf::from("prism.db"));
    }

    #[test]
    fn invalid_multiplier_rejected() {
        let err = PrismConfig::from_toml(
            r#"
            [analysis]
            outlier_multiplier = -1.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = PrismConfig::from_toml(
            r#"
            [analysis]
            top_phrases = 10
            "#,
        )
        .unwrap();

        let cli = CliOverrides {
            top_phrases: Some(99),
            ..Default::default()
        };
        PrismConfig::apply_cli_overrides(&mut config, &cli);
        assert_eq!(config.analysis.effective_top_phrases(), 99);
    }
}
