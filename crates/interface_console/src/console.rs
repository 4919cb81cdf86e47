//! Console I/O
//!
//! [`Console`] is the port every interactive piece talks to. Adapters:
//!
//! - [`Terminal`]: stdin/stdout, hidden password entry through `rpassword`
//! - [`ScriptedConsole`]: replays queued answers and records what was shown
//!
//! Adapters supply the raw line operations; prompting, re-prompting and
//! confirmation are provided on top of them.

use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use domain_policy::parse_amount;

use crate::error::{ConsoleError, ERROR_PREFIX};

/// Line-oriented user interaction
pub trait Console {
    /// Shows a line of output
    fn show(&mut self, message: &str);

    /// Shows an already prefixed error line
    fn write_error(&mut self, line: &str);

    /// Shows `prompt` and reads one raw line
    ///
    /// # Errors
    ///
    /// `ConsoleError::Closed` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Shows `prompt` and reads one line without echoing it
    fn read_hidden(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Clears the screen
    fn clear_screen(&mut self);

    /// Shows an error, adding the `ERROR - ` prefix unless already present
    fn show_error(&mut self, message: &str) {
        if message.starts_with(ERROR_PREFIX) {
            self.write_error(message);
        } else {
            self.write_error(&format!("{}{}", ERROR_PREFIX, message));
        }
    }

    /// Asks a question and returns the trimmed answer
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Asks for a secret without echo
    fn ask_hidden(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        Ok(self.read_hidden(prompt)?.trim().to_string())
    }

    /// Asks until the answer is an integer accepted by `valid`
    fn ask_int(&mut self, prompt: &str, valid: &dyn Fn(i64) -> bool) -> Result<i64, ConsoleError> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<i64>() {
                Ok(value) if valid(value) => return Ok(value),
                _ => self.show_error(&format!("'{}' is not a valid number here", answer)),
            }
        }
    }

    /// Asks until the answer is an amount accepted by `valid`
    ///
    /// `,` is accepted as the decimal separator.
    fn ask_decimal(
        &mut self,
        prompt: &str,
        valid: &dyn Fn(&Decimal) -> bool,
    ) -> Result<Decimal, ConsoleError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_amount(&answer.replace(',', ".")) {
                Some(value) if valid(&value) => return Ok(value),
                _ => self.show_error(&format!("'{}' is not a valid amount here", answer)),
            }
        }
    }

    /// Asks a yes/no question until answered
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.ask(&format!("{} (y/n): ", prompt))?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" | "s" | "si" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.show_error("Please answer y or n"),
            }
        }
    }

    /// Waits for the user to press Enter
    fn pause(&mut self) -> Result<(), ConsoleError> {
        self.read_line("Press Enter to continue...").map(|_| ())
    }
}

/// [`Console`] over the process terminal
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Creates a terminal console
    pub fn new() -> Self {
        Terminal
    }
}

impl Console for Terminal {
    fn show(&mut self, message: &str) {
        println!("{}", message);
    }

    fn write_error(&mut self, line: &str) {
        println!("{}", line);
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut buffer = String::new();
        if io::stdin().lock().read_line(&mut buffer)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_hidden(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        rpassword::prompt_password(prompt).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => ConsoleError::Closed,
            _ => ConsoleError::Io(e),
        })
    }

    fn clear_screen(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
    }
}

/// [`Console`] that replays queued answers and records its output
///
/// Prompts are recorded together with the answer given; hidden answers are
/// not recorded. Running out of answers closes the console.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    /// Creates a console that will answer with `answers`, in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns every recorded line
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns true if any recorded line contains `text`
    pub fn contains(&self, text: &str) -> bool {
        self.output.iter().any(|line| line.contains(text))
    }

    /// Returns the recorded error lines
    pub fn errors(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter(|line| line.starts_with(ERROR_PREFIX))
            .map(String::as_str)
            .collect()
    }

    /// Returns how many times the screen was cleared
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Returns the number of answers not consumed yet
    pub fn remaining_answers(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, message: &str) {
        self.output.push(message.to_string());
    }

    fn write_error(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let answer = self.input.pop_front().ok_or(ConsoleError::Closed)?;
        self.output.push(format!("{}{}", prompt, answer));
        Ok(answer)
    }

    fn read_hidden(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let answer = self.input.pop_front().ok_or(ConsoleError::Closed)?;
        self.output.push(prompt.to_string());
        Ok(answer)
    }

    fn clear_screen(&mut self) {
        self.clears += 1;
    }

    fn pause(&mut self) -> Result<(), ConsoleError> {
        Ok(())
    }
}
