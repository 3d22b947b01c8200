//! CSV export
//!
//! One `key,value` row per field, no header row.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use super::report_fields;
use crate::config::CsvQuoting;
use crate::error::{InsightsError, InsightsResult};
use crate::models::EmployeeRecord;

/// Write a record as two-column CSV
pub fn write_record_csv<W: Write>(
    record: &EmployeeRecord,
    writer: W,
    quoting: CsvQuoting,
) -> InsightsResult<()> {
    let quote_style = match quoting {
        CsvQuoting::Necessary => QuoteStyle::Necessary,
        CsvQuoting::Never => QuoteStyle::Never,
    };

    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(quote_style)
        .from_writer(writer);

    for (key, value) in report_fields(record) {
        csv_writer
            .write_record([key, value.as_str()])
            .map_err(|e| InsightsError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| InsightsError::Export(e.to_string()))?;

    Ok(())
}
