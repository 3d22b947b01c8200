//! User settings for Salary Insights
//!
//! Manages display preferences, the input retry policy and export options.
//! Every field has a default so a partial settings file still loads.

use serde::{Deserialize, Serialize};

use super::paths::InsightsPaths;
use crate::error::InsightsError;

/// How CSV export quotes field values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Quote values containing commas, quotes or newlines (default)
    #[default]
    Necessary,
    /// Never quote; reproduces the legacy `key,value` output
    Never,
}

/// User settings for Salary Insights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown in the terminal summary
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether terminal output is colored
    #[serde(default = "default_true")]
    pub color: bool,

    /// Consecutive invalid entries allowed per numeric prompt (unbounded if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_attempts: Option<u32>,

    /// CSV quoting style
    #[serde(default)]
    pub csv_quoting: CsvQuoting,

    /// Whether Add and Export events are written to the activity log
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            color: true,
            max_input_attempts: None,
            csv_quoting: CsvQuoting::default(),
            audit_log: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &InsightsPaths) -> Result<Self, InsightsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                InsightsError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                InsightsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.color);
        assert!(settings.max_input_attempts.is_none());
        assert_eq!(settings.csv_quoting, CsvQuoting::Necessary);
        assert!(settings.audit_log);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InsightsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InsightsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"csv_quoting": "never", "max_input_attempts": 3, "color": false}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.csv_quoting, CsvQuoting::Never);
        assert_eq!(loaded.max_input_attempts, Some(3));
        assert!(!loaded.color);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InsightsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"csv_quoting": "never"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.csv_quoting, CsvQuoting::Never);
        assert_eq!(loaded.currency_symbol, "$");
        assert!(loaded.audit_log);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InsightsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, InsightsError::Config(_)));
    }
}
