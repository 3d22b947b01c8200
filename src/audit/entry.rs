//! Activity log entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session events that are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// A record was added to the store
    RecordAdded,
    /// Report files were written for the last record
    ReportExported,
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: Event,

    /// Name of the employee the event concerns
    pub employee: String,

    /// Free-form detail (store path, written files)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ActivityEntry {
    /// Entry for a record appended to the store
    pub fn record_added(employee: impl Into<String>, store: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            event: Event::RecordAdded,
            employee: employee.into(),
            detail: Some(store.into()),
        }
    }

    /// Entry for an export, listing the files written
    pub fn report_exported(employee: impl Into<String>, files: &[String]) -> Self {
        Self {
            timestamp: Utc::now(),
            event: Event::ReportExported,
            employee: employee.into(),
            detail: Some(files.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_snake_case() {
        let json = serde_json::to_string(&Event::ReportExported).unwrap();
        assert_eq!(json, "\"report_exported\"");
    }

    #[test]
    fn test_report_exported_detail() {
        let entry = ActivityEntry::report_exported(
            "Jane Doe",
            &["Jane_Doe_report.txt".to_string(), "Jane_Doe.csv".to_string()],
        );
        assert_eq!(entry.event, Event::ReportExported);
        assert_eq!(
            entry.detail.as_deref(),
            Some("Jane_Doe_report.txt, Jane_Doe.csv")
        );
    }

    #[test]
    fn test_record_added_detail() {
        let entry = ActivityEntry::record_added("Jane Doe", "employees.json");
        assert_eq!(entry.event, Event::RecordAdded);
        assert_eq!(entry.employee, "Jane Doe");
        assert_eq!(entry.detail.as_deref(), Some("employees.json"));
    }
}
