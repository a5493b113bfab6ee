//! Occurrence generation for daily, weekly, monthly and yearly series.

mod generator;
mod request;

pub use generator::{Generator, generate};
pub use request::{OccurrenceList, RecurrenceRequest};

use cadence_core::types::RecurrenceType;
use chrono::{Days, NaiveDate};

use crate::calendar::{add_months_clamped, add_years_clamped};

/// ## Summary
/// Advances `date` by one step of `interval` units of `recurrence_type`.
///
/// Monthly and yearly steps clamp against the day of `date` itself, so a
/// series that was clamped once keeps the shorter day from then on.
///
/// Returns `None` if the next date is not representable.
#[must_use]
pub fn advance(date: NaiveDate, recurrence_type: RecurrenceType, interval: u32) -> Option<NaiveDate> {
    match recurrence_type {
        RecurrenceType::Daily => date.checked_add_days(Days::new(u64::from(interval))),
        RecurrenceType::Weekly => {
            date.checked_add_days(Days::new(u64::from(interval).checked_mul(7)?))
        }
        RecurrenceType::Monthly => add_months_clamped(date, interval),
        RecurrenceType::Yearly => add_years_clamped(date, interval),
    }
}
