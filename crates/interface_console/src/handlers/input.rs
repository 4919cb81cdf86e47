//! Prompts shared by the action handlers
//!
//! National IDs and premiums re-prompt until valid. Every other typed answer
//! aborts the action when it does not parse.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::parse_date;
use domain_policy::parse_amount;

use crate::console::Console;
use crate::error::{ActionError, ConsoleError};

/// Returns true for eight digits followed by one upper-case letter
pub fn is_national_id(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.len() == 9
        && chars[..8].iter().all(char::is_ascii_digit)
        && chars[8].is_ascii_uppercase()
}

/// Asks for a national ID until it has the `12345678A` shape
///
/// The answer is upper-cased first, so `12345678a` is taken as `12345678A`.
pub fn ask_national_id(console: &mut dyn Console) -> Result<String, ConsoleError> {
    loop {
        let answer = console.ask("Holder national ID: ")?.to_uppercase();
        if is_national_id(&answer) {
            return Ok(answer);
        }
        console.show_error("The national ID must be 8 digits followed by a letter");
    }
}

/// Asks for a premium until it is a positive amount
pub fn ask_premium(console: &mut dyn Console) -> Result<Decimal, ConsoleError> {
    console.ask_decimal("Premium: ", &|value| *value > Decimal::ZERO)
}

/// Asks for an amount; an unreadable answer aborts
pub fn ask_amount(console: &mut dyn Console, prompt: &str, field: &'static str) -> Result<Decimal, ActionError> {
    let answer = console.ask(prompt)?;
    parse_amount(&answer.replace(',', ".")).ok_or_else(|| ActionError::parse(field, &answer))
}

/// Asks for a non-negative whole number; an unreadable answer aborts
pub fn ask_count(console: &mut dyn Console, prompt: &str, field: &'static str) -> Result<u32, ActionError> {
    let answer = console.ask(prompt)?;
    answer.parse().map_err(|_| ActionError::parse(field, &answer))
}

/// Asks for a `dd/MM/yyyy` date; an unreadable answer aborts
pub fn ask_date(console: &mut dyn Console, prompt: &str) -> Result<NaiveDate, ActionError> {
    let answer = console.ask(prompt)?;
    Ok(parse_date(&answer)?)
}
