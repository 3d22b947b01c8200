//! Salary Insights - interactive employee salary projections
//!
//! This library provides the core functionality for the `insights` binary:
//! it collects employee salary data, projects salary growth and savings,
//! appends every entry to a JSON store and exports the last entry as a text
//! report or CSV file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: The employee record
//! - `services`: Financial projections
//! - `storage`: JSON store with atomic writes
//! - `export`: Text and CSV reports
//! - `audit`: Activity log
//! - `display`: Terminal formatting
//! - `session`: Prompts and the interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use salary_insights::config::{InsightsPaths, Settings};
//!
//! let paths = InsightsPaths::new(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{InsightsError, InsightsResult};
pub use models::EmployeeRecord;
pub use services::compute_financials;
