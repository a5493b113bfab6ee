//! Calendar date parsing for string-typed inputs.
//!
//! ## Summary
//! Dates are plain calendar days (`YYYY-MM-DD`) with no time or zone attached.

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;
use crate::error::{CoreError, CoreResult};

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Examples:
/// - "2024-10-01" -> 2024-10-01
/// - "2024-02-30" -> error (no such day)
/// - "10/01/2024" -> error (wrong format)
///
/// ## Errors
/// Returns `CoreError::ParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|err| {
        CoreError::ParseError(format!(
            "invalid date '{value}': {err}. Expected YYYY-MM-DD"
        ))
    })
}
