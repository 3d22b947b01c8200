//! Interactive prompts
//!
//! `Prompter` reads answers line by line from any `BufRead` and writes
//! prompts to any `Write`, so the same code drives stdin/stdout and tests.

use std::io::{BufRead, Write};

use crate::display;
use crate::error::{InsightsError, InsightsResult};

const INVALID_INTEGER: &str = "Invalid number! Enter an integer.";
const INVALID_AMOUNT: &str = "Invalid amount! Enter a numeric value.";

/// Prompts the user and coerces answers into typed values
pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// Consecutive failures allowed per numeric prompt; `None` retries forever
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter with unbounded retries
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
        }
    }

    /// Limit how many invalid numeric entries are tolerated in a row
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Where prompts and messages are written
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write one line of output
    pub fn say(&mut self, text: &str) -> InsightsResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Ask for free text; the answer is returned as typed
    pub fn prompt_text(&mut self, prompt: &str) -> InsightsResult<String> {
        self.read_answer(prompt)
    }

    /// Ask until the answer parses as an integer
    pub fn prompt_integer(&mut self, prompt: &str) -> InsightsResult<i64> {
        self.prompt_parsed(prompt, INVALID_INTEGER, |answer| answer.trim().parse().ok())
    }

    /// Ask until the answer parses as a finite number
    pub fn prompt_float(&mut self, prompt: &str) -> InsightsResult<f64> {
        self.prompt_parsed(prompt, INVALID_AMOUNT, |answer| {
            answer
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
        })
    }

    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        invalid_message: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> InsightsResult<T> {
        let mut failures = 0u32;

        loop {
            let answer = self.read_answer(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }

            self.say(&display::error_line(invalid_message))?;
            failures += 1;

            if let Some(max) = self.max_attempts {
                if failures >= max {
                    return Err(InsightsError::InputAttemptsExhausted {
                        prompt: prompt.trim().to_string(),
                        attempts: failures,
                    });
                }
            }
        }
    }

    /// Show the prompt and read one line without its terminator
    fn read_answer(&mut self, prompt: &str) -> InsightsResult<String> {
        write!(self.output, "{}", display::prompt(prompt))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InsightsError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}
