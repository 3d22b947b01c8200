//! Service layer for Salary Insights
//!
//! Business calculations on top of the data models.

pub mod financials;

pub use financials::{compute_financials, Projection};
