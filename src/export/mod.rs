//! Export module for Salary Insights
//!
//! Writes a single employee record to the `reports/` directory:
//! - Text: a `key: value` report with a fixed header line
//! - CSV: two-column `key,value` rows without a header
//!
//! Both formats list the fields in store order and overwrite any earlier file.

pub mod csv;
pub mod text;

use std::fs;
use std::path::PathBuf;

use crate::config::CsvQuoting;
use crate::error::{InsightsError, InsightsResult};
use crate::models::EmployeeRecord;

pub use self::csv::write_record_csv;
pub use self::text::render_text_report;

/// Which files an export produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
    Both,
}

impl ExportFormat {
    /// Map an export submenu number to a format
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Text),
            2 => Some(Self::Csv),
            3 => Some(Self::Both),
            _ => None,
        }
    }

    /// Confirmation shown after a successful export
    pub fn confirmation(&self) -> &'static str {
        match self {
            Self::Text => "Saved as TXT!",
            Self::Csv => "Saved as CSV!",
            Self::Both => "Saved TXT + CSV!",
        }
    }
}

/// Record fields in store order, rendered for reports
pub fn report_fields(record: &EmployeeRecord) -> Vec<(&'static str, String)> {
    vec![
        ("name", record.name.clone()),
        ("department", record.department.clone()),
        ("experience", record.experience.to_string()),
        ("current_salary", format_number(record.current_salary)),
        ("annual_salary", format_number(record.annual_salary)),
        ("post_tax", format_number(record.post_tax)),
        ("growth", format_list(&record.growth)),
        ("annual_savings", format_number(record.annual_savings)),
        ("five_year_savings", format_number(record.five_year_savings)),
    ]
}

/// Shortest round-trip form, keeping a `.0` on integral values
///
/// Magnitudes from `1e16` up, or below `1e-4`, switch to exponent form with a
/// signed, two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
    format!("[{}]", items.join(", "))
}

/// Writes report files for a record into one directory
pub struct ReportExporter {
    reports_dir: PathBuf,
    quoting: CsvQuoting,
}

impl ReportExporter {
    /// Create an exporter writing into `reports_dir`
    pub fn new(reports_dir: PathBuf, quoting: CsvQuoting) -> Self {
        Self {
            reports_dir,
            quoting,
        }
    }

    /// Path of the text report for a record
    pub fn text_path(&self, record: &EmployeeRecord) -> PathBuf {
        self.reports_dir
            .join(format!("{}_report.txt", record.file_stem()))
    }

    /// Path of the CSV export for a record
    pub fn csv_path(&self, record: &EmployeeRecord) -> PathBuf {
        self.reports_dir.join(format!("{}.csv", record.file_stem()))
    }

    /// Write the text report, replacing any previous one
    pub fn export_text(&self, record: &EmployeeRecord) -> InsightsResult<PathBuf> {
        let path = self.text_path(record);
        fs::write(&path, render_text_report(record)).map_err(|e| {
            InsightsError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }

    /// Write the CSV export, replacing any previous one
    pub fn export_csv(&self, record: &EmployeeRecord) -> InsightsResult<PathBuf> {
        let path = self.csv_path(record);
        let file = fs::File::create(&path).map_err(|e| {
            InsightsError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        write_record_csv(record, file, self.quoting)?;
        Ok(path)
    }

    /// Write every file the format asks for
    pub fn export(
        &self,
        record: &EmployeeRecord,
        format: ExportFormat,
    ) -> InsightsResult<Vec<PathBuf>> {
        match format {
            ExportFormat::Text => Ok(vec![self.export_text(record)?]),
            ExportFormat::Csv => Ok(vec![self.export_csv(record)?]),
            ExportFormat::Both => Ok(vec![self.export_text(record)?, self.export_csv(record)?]),
        }
    }
}
