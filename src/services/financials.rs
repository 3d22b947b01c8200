//! Financial projections
//!
//! Pure calculations from a monthly salary: annual and post-tax salary,
//! compounded salary growth and savings estimates. No I/O happens here.

/// Flat tax withheld from the monthly salary
pub const TAX_RATE: f64 = 0.12;

/// Yearly salary growth
pub const GROWTH_RATE: f64 = 0.05;

/// Share of the post-tax salary put into savings
pub const SAVINGS_RATE: f64 = 0.20;

/// Number of projected growth years (and of savings years)
pub const GROWTH_YEARS: usize = 5;

/// Projections derived from a monthly salary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub annual_salary: f64,
    pub post_tax: f64,
    pub growth: [f64; GROWTH_YEARS],
    pub annual_savings: f64,
    pub five_year_savings: f64,
}

/// Compute the projection bundle for a monthly salary
///
/// Negative salaries are not rejected; the arithmetic simply carries the sign.
pub fn compute_financials(salary: f64) -> Projection {
    let post_tax = salary * (1.0 - TAX_RATE);
    let annual_savings = post_tax * SAVINGS_RATE;

    Projection {
        annual_salary: salary * 12.0,
        post_tax,
        growth: project_growth(salary),
        annual_savings,
        five_year_savings: annual_savings * GROWTH_YEARS as f64,
    }
}

/// Compound the salary yearly, each year starting from the prior rounded value
pub fn project_growth(salary: f64) -> [f64; GROWTH_YEARS] {
    let mut growth = [0.0; GROWTH_YEARS];
    let mut current = salary;

    for year in growth.iter_mut() {
        current = round_cents(current * (1.0 + GROWTH_RATE));
        *year = current;
    }

    growth
}

/// Round to two decimals on the exact binary value, ties to even
///
/// `1050.105` is stored slightly above the tie and rounds up to `1050.11`,
/// while the exact tie `5788.125` goes to `5788.12`.
pub fn round_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
