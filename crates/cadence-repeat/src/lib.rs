//! Recurring calendar-event dates.
//!
//! Expands a start date, an end boundary, a cadence and an interval into the
//! ordered list of occurrence dates, clamping days that overflow short months
//! and non-leap Februaries.

#[cfg(test)]
extern crate self as cadence_repeat;

pub mod calendar;
pub mod error;
pub mod event;
pub mod recurrence;

pub use cadence_core::types::{RecurrenceType, RepeatType};
pub use recurrence::{Generator, OccurrenceList, RecurrenceRequest, advance, generate};
