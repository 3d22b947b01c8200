//! Path management for Salary Insights
//!
//! All files live under a single base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `INSIGHTS_DATA_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::InsightsError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "INSIGHTS_DATA_DIR";

/// Manages all paths used by Salary Insights
#[derive(Debug, Clone)]
pub struct InsightsPaths {
    /// Base directory for the store, reports and settings
    base_dir: PathBuf,
}

impl InsightsPaths {
    /// Create a new InsightsPaths instance
    ///
    /// An explicit directory wins; otherwise the current working directory
    /// is used, the way the store and reports always sat next to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, InsightsError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create InsightsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the employee store (employees.json)
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("employees.json")
    }

    /// Get the report directory (reports/)
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("insights-config.json")
    }

    /// Get the path to the activity log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("insights-audit.log")
    }

    /// Ensure all required directories exist
    ///
    /// Creates the base directory and `reports/`.
    pub fn ensure_directories(&self) -> Result<(), InsightsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| InsightsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir())
            .map_err(|e| InsightsError::Io(format!("Failed to create reports directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, InsightsError> {
    std::env::current_dir().map_err(|e| {
        InsightsError::Config(format!("Could not determine working directory: {}", e))
    })
}
