//! Calendar events as exchanged with the events API, and series expansion.
//!
//! A repeating event is stored as one record carrying its repeat setting.
//! Before it is submitted as a batch, it is expanded into one dated copy per
//! occurrence. Ids are left empty for the server to assign.

use cadence_core::types::RepeatType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RepeatError, RepeatResult};
use crate::recurrence::{Generator, RecurrenceRequest};

/// Repeat setting attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type", default)]
    pub repeat_type: RepeatType,
    /// `0` is common on one-off events and only rejected when expanding.
    #[serde(default)]
    pub interval: u32,
    /// Last day (inclusive) the series may fall on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Series id shared by every event of one expansion, set by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub date: NaiveDate,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Minutes before the start to notify.
    #[serde(default)]
    pub notification_time: u32,
}

impl Event {
    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        self.repeat.repeat_type.recurrence().is_some()
    }
}

/// ## Summary
/// Expands `event` into one event per occurrence date, starting at
/// `event.date` and ending at `event.repeat.end_date`.
///
/// One-off events come back unchanged as a single-element list. Expanded
/// copies have `id` cleared and keep every other field.
///
/// ## Errors
/// - `RepeatError::MissingEndDate` if the event repeats without an end date.
/// - Any error of [`Generator::generate`].
pub fn expand_event(event: &Event, generator: &Generator) -> RepeatResult<Vec<Event>> {
    let Some(recurrence_type) = event.repeat.repeat_type.recurrence() else {
        tracing::trace!(title = %event.title, "Event does not repeat");
        return Ok(vec![event.clone()]);
    };
    let end_date = event.repeat.end_date.ok_or(RepeatError::MissingEndDate)?;

    let request = RecurrenceRequest::new(
        event.date,
        end_date,
        recurrence_type,
        event.repeat.interval,
    );
    let dates = generator.generate(&request)?;

    tracing::debug!(
        title = %event.title,
        recurrence = %recurrence_type,
        count = dates.len(),
        "Expanded repeating event"
    );

    Ok(dates
        .into_iter()
        .map(|date| Event {
            id: None,
            date,
            ..event.clone()
        })
        .collect())
}
