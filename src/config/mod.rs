//! Configuration module for Salary Insights
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::InsightsPaths;
pub use settings::{CsvQuoting, Settings};
