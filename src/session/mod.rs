//! Interactive menu session
//!
//! The session owns everything one run of the menu loop needs, including
//! the last added record, which is the only record that can be exported.
//!
//! ```text
//! MainMenu --1--> add employee ------------------> MainMenu
//! MainMenu --2--> ExportSubmenu --1/2/3/other----> MainMenu
//! MainMenu --3--> exit
//! ```

pub mod input;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::audit::{ActivityEntry, ActivityLogger};
use crate::display;
use crate::error::{InsightsError, InsightsResult};
use crate::export::{ExportFormat, ReportExporter};
use crate::models::EmployeeRecord;
use crate::storage::RecordStore;

pub use input::Prompter;

/// Top-level menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Export,
    Exit,
}

impl MenuChoice {
    /// Map a main menu number to an option
    pub fn from_number(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Add),
            2 => Some(Self::Export),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What the loop does after handling a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive run of the menu loop
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    store: RecordStore,
    exporter: ReportExporter,
    activity: Option<ActivityLogger>,
    currency_symbol: String,
    last_record: Option<EmployeeRecord>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with no activity log and a `$` currency symbol
    pub fn new(prompter: Prompter<R, W>, store: RecordStore, exporter: ReportExporter) -> Self {
        Self {
            prompter,
            store,
            exporter,
            activity: None,
            currency_symbol: "$".to_string(),
            last_record: None,
        }
    }

    /// Record Add and Export events in an activity log
    pub fn with_activity_log(mut self, logger: ActivityLogger) -> Self {
        self.activity = Some(logger);
        self
    }

    /// Currency symbol used in the terminal summary
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// The most recently added record, if any
    pub fn last_record(&self) -> Option<&EmployeeRecord> {
        self.last_record.as_ref()
    }

    /// Everything written to the terminal so far
    pub fn output(&mut self) -> &mut W {
        self.prompter.output()
    }

    /// Run the menu loop until the user exits
    ///
    /// Recoverable errors are reported and the menu is shown again; anything
    /// else ends the session and is returned.
    pub fn run(&mut self) -> InsightsResult<()> {
        loop {
            self.prompter.say(&display::banner())?;
            self.prompter.say(&display::main_menu())?;
            let choice = self.prompter.prompt_integer("Choose an option: ")?;

            match self.handle_choice(choice) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) if err.is_recoverable() => {
                    self.prompter.say(&display::error_line(&err.to_string()))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Handle one main menu choice
    pub fn handle_choice(&mut self, choice: i64) -> InsightsResult<Flow> {
        match MenuChoice::from_number(choice) {
            Some(MenuChoice::Add) => {
                self.add_employee()?;
                Ok(Flow::Continue)
            }
            Some(MenuChoice::Export) => {
                self.export_last()?;
                Ok(Flow::Continue)
            }
            Some(MenuChoice::Exit) => {
                self.prompter.say(&display::farewell())?;
                Ok(Flow::Exit)
            }
            None => Err(InsightsError::InvalidMenuChoice(choice)),
        }
    }

    /// Collect an employee, show the summary and append it to the store
    pub fn add_employee(&mut self) -> InsightsResult<&EmployeeRecord> {
        let name = self.prompter.prompt_text("Enter full name: ")?;
        let department = self.prompter.prompt_text("Enter department: ")?;
        let experience = self
            .prompter
            .prompt_integer("Enter years of experience: ")?;
        let salary = self.prompter.prompt_float(&format!(
            "Enter current monthly salary ({}): ",
            self.currency_symbol
        ))?;

        let record = EmployeeRecord::new(name, department, experience, salary);

        self.prompter
            .say(&display::format_summary(&record, &self.currency_symbol))?;

        self.store.save_record(&record)?;
        self.prompter
            .say(&display::success_line("Employee data saved to JSON!"))?;

        if let Some(logger) = &self.activity {
            logger.log(&ActivityEntry::record_added(
                record.name.as_str(),
                self.store.path().display().to_string(),
            ))?;
        }

        Ok(&*self.last_record.insert(record))
    }

    /// Ask for a format and export the last record
    pub fn export_last(&mut self) -> InsightsResult<Vec<PathBuf>> {
        let record = self
            .last_record
            .clone()
            .ok_or(InsightsError::MissingLastRecord)?;

        self.prompter.say(&display::export_menu())?;
        let choice = self.prompter.prompt_integer("Choose: ")?;
        let format = ExportFormat::from_choice(choice)
            .ok_or(InsightsError::InvalidExportChoice(choice))?;

        let written = self.exporter.export(&record, format)?;

        self.prompter
            .say(&display::success_line(format.confirmation()))?;
        for path in &written {
            self.prompter
                .say(&display::muted_line(&format!("  {}", path.display())))?;
        }

        if let Some(logger) = &self.activity {
            let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
            logger.log(&ActivityEntry::report_exported(record.name.as_str(), &files))?;
        }

        Ok(written)
    }
}
