use cadence_core::types::RecurrenceType;
use cadence_core::util::date::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RepeatResult;

/// Input to one generator run.
///
/// `end_date` may precede `start_date`; the series is then empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRequest {
    pub start_date: NaiveDate,
    /// Inclusive upper bound.
    pub end_date: NaiveDate,
    pub recurrence_type: RecurrenceType,
    /// Step size in units of `recurrence_type`. Must be at least 1.
    pub interval: u32,
}

impl RecurrenceRequest {
    #[must_use]
    pub const fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        recurrence_type: RecurrenceType,
        interval: u32,
    ) -> Self {
        Self {
            start_date,
            end_date,
            recurrence_type,
            interval,
        }
    }

    /// ## Summary
    /// Builds a request from `YYYY-MM-DD` dates and a cadence name such as
    /// `weekly`.
    ///
    /// ## Errors
    /// Returns `RepeatError::CoreError` wrapping a parse error if a date or
    /// the cadence name is invalid. The interval is checked by the generator.
    pub fn parse(
        start_date: &str,
        end_date: &str,
        recurrence_type: &str,
        interval: u32,
    ) -> RepeatResult<Self> {
        Ok(Self::new(
            parse_date(start_date)?,
            parse_date(end_date)?,
            recurrence_type.parse()?,
            interval,
        ))
    }
}

/// Chronologically increasing occurrence dates produced by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceList(Vec<NaiveDate>);

impl OccurrenceList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<NaiveDate> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<NaiveDate> {
        self.0.last().copied()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<NaiveDate> {
        self.0
    }
}

impl From<Vec<NaiveDate>> for OccurrenceList {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self(dates)
    }
}

impl IntoIterator for OccurrenceList {
    type Item = NaiveDate;
    type IntoIter = std::vec::IntoIter<NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OccurrenceList {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
