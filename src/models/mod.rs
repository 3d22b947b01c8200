//! Core data models for Salary Insights

pub mod record;

pub use record::EmployeeRecord;
