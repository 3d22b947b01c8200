//! Plain-text report

use super::report_fields;
use crate::models::EmployeeRecord;

/// First line of every text report
pub const REPORT_HEADER: &str = "----- Employee Financial Report -----";

/// Render the report: the header, then one `key: value` line per field
pub fn render_text_report(record: &EmployeeRecord) -> String {
    let mut output = String::new();
    output.push_str(REPORT_HEADER);
    output.push('\n');

    for (key, value) in report_fields(record) {
        output.push_str(&format!("{}: {}\n", key, value));
    }

    output
}
