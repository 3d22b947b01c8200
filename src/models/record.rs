//! Employee record model
//!
//! A record is an immutable snapshot of what the user entered plus the
//! projections derived from the monthly salary.

use serde::{Deserialize, Serialize};

use crate::services::financials::{compute_financials, Projection, GROWTH_YEARS};

/// One employee entry as stored in `employees.json`
///
/// Field order is the store's key order and the order of every export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub department: String,
    /// Years of experience
    pub experience: i64,
    /// Monthly salary
    pub current_salary: f64,
    pub annual_salary: f64,
    /// Monthly salary after tax
    pub post_tax: f64,
    /// Projected monthly salary for each of the next years
    pub growth: [f64; GROWTH_YEARS],
    pub annual_savings: f64,
    pub five_year_savings: f64,
}

impl EmployeeRecord {
    /// Build a record from entered values, deriving all projections
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        experience: i64,
        current_salary: f64,
    ) -> Self {
        Self::from_projection(
            name,
            department,
            experience,
            current_salary,
            compute_financials(current_salary),
        )
    }

    /// Combine entered values with an already computed projection
    pub fn from_projection(
        name: impl Into<String>,
        department: impl Into<String>,
        experience: i64,
        current_salary: f64,
        projection: Projection,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            experience,
            current_salary,
            annual_salary: projection.annual_salary,
            post_tax: projection.post_tax,
            growth: projection.growth,
            annual_savings: projection.annual_savings,
            five_year_savings: projection.five_year_savings,
        }
    }

    /// File name stem for exports: spaces become underscores
    pub fn file_stem(&self) -> String {
        self.name.replace(' ', "_")
    }
}
