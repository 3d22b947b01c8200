use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use salary_insights::audit::ActivityLogger;
use salary_insights::config::{paths::DATA_DIR_ENV, InsightsPaths, Settings};
use salary_insights::export::ReportExporter;
use salary_insights::session::{Prompter, Session};
use salary_insights::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "insights",
    version,
    about = "Employee salary projections from the terminal",
    long_about = "Salary Insights asks for an employee's details and monthly salary, \
                  shows annual, post-tax, growth and savings projections, keeps every \
                  entry in employees.json and exports the last entry to reports/."
)]
struct Cli {
    /// Directory holding employees.json, reports/ and settings (default: current directory)
    #[arg(long, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = InsightsPaths::new(cli.data_dir)?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    if !settings.color {
        crossterm::style::force_color_output(false);
    }

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout())
        .with_max_attempts(settings.max_input_attempts);

    let mut session = Session::new(
        prompter,
        RecordStore::from(&paths),
        ReportExporter::new(paths.reports_dir(), settings.csv_quoting),
    )
    .with_currency_symbol(settings.currency_symbol.as_str());

    if settings.audit_log {
        session = session.with_activity_log(ActivityLogger::new(paths.audit_log()));
    }

    session.run()?;

    Ok(())
}
