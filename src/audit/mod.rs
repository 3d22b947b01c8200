//! Activity logging for Salary Insights
//!
//! Records every Add and Export in an append-only, line-delimited JSON log
//! (`insights-audit.log`).
//!
//! # Example
//!
//! ```rust,ignore
//! use salary_insights::audit::{ActivityEntry, ActivityLogger};
//!
//! let logger = ActivityLogger::new(paths.audit_log());
//! logger.log(&ActivityEntry::record_added("Jane Doe", "employees.json"))?;
//! ```

mod entry;
mod logger;

pub use entry::{ActivityEntry, Event};
pub use logger::ActivityLogger;
