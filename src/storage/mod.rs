//! Storage layer for Salary Insights
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod records;

pub use file_io::{read_json_if_exists, write_json_atomic};
pub use records::RecordStore;
