use cadence_core::config::RecurrenceConfig;
use cadence_core::constants::DEFAULT_MAX_OCCURRENCES;

use super::advance;
use super::request::{OccurrenceList, RecurrenceRequest};
use crate::error::{RepeatError, RepeatResult};

/// Expands recurrence requests into occurrence lists.
///
/// Holds the cap on how many dates one request may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    max_occurrences: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_limit(DEFAULT_MAX_OCCURRENCES)
    }
}

impl Generator {
    /// Creates a generator that fails once a series would exceed
    /// `max_occurrences` dates. A cap of 0 is raised to 1 so the start date
    /// can always be emitted.
    #[must_use]
    pub fn new(max_occurrences: usize) -> Self {
        Self {
            max_occurrences: max_occurrences.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &RecurrenceConfig) -> Self {
        Self::from_limit(config.max_occurrences)
    }

    fn from_limit(limit: u32) -> Self {
        Self::new(usize::try_from(limit).unwrap_or(usize::MAX))
    }

    #[must_use]
    pub const fn max_occurrences(&self) -> usize {
        self.max_occurrences
    }

    /// ## Summary
    /// Produces every occurrence from `start_date` through `end_date`
    /// inclusive. The start date is always the first occurrence unless it is
    /// already past the end.
    ///
    /// ## Errors
    /// - `RepeatError::InvalidInterval` if `interval` is 0.
    /// - `RepeatError::OccurrenceLimitExceeded` if the range holds more dates
    ///   than this generator allows.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn generate(&self, request: &RecurrenceRequest) -> RepeatResult<OccurrenceList> {
        if request.interval == 0 {
            tracing::warn!(interval = request.interval, "Rejected recurrence interval");
            return Err(RepeatError::InvalidInterval);
        }

        let mut dates = Vec::new();
        let mut current = Some(request.start_date);

        while let Some(date) = current.filter(|date| *date <= request.end_date) {
            if dates.len() >= self.max_occurrences {
                tracing::warn!(
                    limit = self.max_occurrences,
                    "Recurrence exceeds occurrence limit"
                );
                return Err(RepeatError::OccurrenceLimitExceeded(self.max_occurrences));
            }

            tracing::trace!(date = %date, "Emitting occurrence");
            dates.push(date);
            current = advance(date, request.recurrence_type, request.interval);
        }

        tracing::debug!(count = dates.len(), "Generated occurrences");
        Ok(OccurrenceList::from(dates))
    }
}

/// ## Summary
/// Generates occurrences with the default occurrence limit.
///
/// ## Errors
/// See [`Generator::generate`].
pub fn generate(request: &RecurrenceRequest) -> RepeatResult<OccurrenceList> {
    Generator::default().generate(request)
}
