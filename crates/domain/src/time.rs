//! Calendar-date helpers.
//!
//! Posts and comments carry a plain `YYYY-MM-DD` date chosen by the client
//! at creation time.

use chrono::{NaiveDate, Utc};

use crate::error::ValidationError;

/// `strftime` pattern for the dates exchanged with the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Return the current UTC calendar day.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when `value` is not exactly ten
/// characters of a valid calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    if value.len() != 10 {
        return Err(ValidationError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}
