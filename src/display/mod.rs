//! Terminal output formatting
//!
//! Every function returns a `String`; the session decides where it goes.
//! Colors come from crossterm and honor `NO_COLOR`.

pub mod report;

use crossterm::style::Stylize;

pub use report::{format_money, format_summary};

const RULE_WIDTH: usize = 70;

/// Program banner shown before each main menu
pub fn banner() -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!(
        "\n{}\n{}\n{}",
        rule.as_str().cyan(),
        "           Employee Financial Insights System".yellow(),
        rule.as_str().cyan()
    )
}

/// Main menu options
pub fn main_menu() -> String {
    format!(
        "{}\n1. Add Employee Financial Report\n2. Export Last Report (TXT/CSV)\n3. Exit",
        "\nMenu Options:".magenta()
    )
}

/// Export submenu options
pub fn export_menu() -> String {
    format!(
        "{}\n1. Save as TXT\n2. Save as CSV\n3. Save Both",
        "\nExport Options:".yellow()
    )
}

/// Prompt text
pub fn prompt(text: &str) -> String {
    text.green().to_string()
}

/// A recoverable failure message
pub fn error_line(message: &str) -> String {
    format!("❌ {}", message).red().to_string()
}

/// A completed action
pub fn success_line(message: &str) -> String {
    format!("✔ {}", message).green().to_string()
}

/// Secondary information such as written file paths
pub fn muted_line(message: &str) -> String {
    message.dark_grey().to_string()
}

/// Message printed when the user exits
pub fn farewell() -> String {
    "\nThank you for using the Financial Insights System!"
        .cyan()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menus_list_options() {
        let menu = main_menu();
        assert!(menu.contains("1. Add Employee Financial Report"));
        assert!(menu.contains("2. Export Last Report (TXT/CSV)"));
        assert!(menu.contains("3. Exit"));

        let export = export_menu();
        assert!(export.contains("1. Save as TXT"));
        assert!(export.contains("3. Save Both"));
    }

    #[test]
    fn test_message_prefixes() {
        assert!(error_line("Invalid choice! Try again.").contains("❌ Invalid choice! Try again."));
        assert!(success_line("Saved as TXT!").contains("✔ Saved as TXT!"));
    }

    #[test]
    fn test_banner_rule_width() {
        assert!(banner().contains(&"-".repeat(RULE_WIDTH)));
    }
}
