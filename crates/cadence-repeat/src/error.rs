use thiserror::Error;

/// Recurrence generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepeatError {
    #[error("반복 간격은 1 이상이어야 합니다.")]
    InvalidInterval,

    #[error("Occurrence limit exceeded: more than {0} dates in range")]
    OccurrenceLimitExceeded(usize),

    #[error("Repeating event has no end date")]
    MissingEndDate,

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),
}

pub type RepeatResult<T> = std::result::Result<T, RepeatError>;
