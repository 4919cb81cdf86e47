//! Date handling
//!
//! Every date the application reads from the console or from a data file uses
//! the day-first `dd/MM/yyyy` layout. Ages and building antiquity are counted
//! in calendar years, ignoring the day of the year.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// chrono format string for `dd/MM/yyyy`
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `dd/MM/yyyy` date
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` carrying the offending input
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(trimmed.to_string()))
}

/// Formats a date as `dd/MM/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Number of calendar years from `from` to `to`
///
/// Only the year component is compared, so 31/12/2000 to 01/01/2001 is one
/// year. Negative when `from` is after `to`.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    to.year() - from.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let date = parse_date("01/01/2000").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(format_date(date), "01/01/2000");
    }

    #[test]
    fn test_parse_rejects_iso() {
        assert!(matches!(parse_date("2000-01-01"), Err(CoreError::InvalidDate(_))));
    }

    #[test]
    fn test_years_between_ignores_day() {
        let from = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
        let to = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        assert_eq!(years_between(from, to), 1);
    }
}
