//! Summary shown after an employee is added

use crossterm::style::Stylize;

use crate::models::EmployeeRecord;

/// Format an amount with two decimals and a currency symbol
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format the financial summary for a freshly added record
pub fn format_summary(record: &EmployeeRecord, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n",
        "\n--- Employee Financial Report Generated ---".cyan()
    ));
    output.push_str(&format!("{}\n", format!("Name: {}", record.name).yellow()));
    output.push_str(&format!("Department: {}\n", record.department));
    output.push_str(&format!("Experience: {} years\n", record.experience));
    output.push_str(&format!(
        "Monthly Salary: {}\n",
        format_money(record.current_salary, symbol)
    ));
    output.push_str(&format!(
        "Annual Salary: {}\n",
        format_money(record.annual_salary, symbol)
    ));
    output.push_str(&format!(
        "Post-Tax Salary: {}\n",
        format_money(record.post_tax, symbol)
    ));

    output.push_str(&format!(
        "{}\n",
        format!("\nSalary Growth for {} Years:", record.growth.len()).magenta()
    ));
    for (year, amount) in record.growth.iter().enumerate() {
        output.push_str(&format!(" Year {}: {}\n", year + 1, format_money(*amount, symbol)));
    }

    output.push_str(&format!(
        "{}\n",
        format!(
            "\nAnnual Savings: {}",
            format_money(record.annual_savings, symbol)
        )
        .green()
    ));
    output.push_str(&format!(
        "{}",
        format!(
            "5-Year Savings: {}",
            format_money(record.five_year_savings, symbol)
        )
        .green()
    ));

    output
}
