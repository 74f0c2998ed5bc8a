/// Input validation helpers used before calling into the tracker
///
/// The tracker itself treats bad input as a no-op. These helpers let callers
/// find out why an input would be ignored so they can tell the user.

use chrono::NaiveDate;
use crate::domain::DomainError;

/// Longest habit name accepted from a client
pub const MAX_NAME_LEN: usize = 100;

/// Date format accepted from clients
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a habit name typed by the user and return it trimmed
pub fn validate_habit_name(name: &str) -> Result<&str, DomainError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidHabitName(
            "Enter a habit name".to_string()
        ));
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidHabitName(format!(
            "Habit name cannot be longer than {} characters",
            MAX_NAME_LEN
        )));
    }

    Ok(trimmed)
}

/// Parse a `YYYY-MM-DD` calendar day
pub fn parse_day(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", s))
    })
}
