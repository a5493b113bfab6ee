use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Cadence unit of a recurring series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(CoreError::ParseError(format!(
                "unknown recurrence type '{other}'"
            ))),
        }
    }
}

/// Repeat setting of a stored event; `None` marks a one-off event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// The generator cadence for this repeat setting, if it repeats at all.
    #[must_use]
    pub const fn recurrence(self) -> Option<RecurrenceType> {
        match self {
            Self::None => None,
            Self::Daily => Some(RecurrenceType::Daily),
            Self::Weekly => Some(RecurrenceType::Weekly),
            Self::Monthly => Some(RecurrenceType::Monthly),
            Self::Yearly => Some(RecurrenceType::Yearly),
        }
    }
}

impl From<RecurrenceType> for RepeatType {
    fn from(value: RecurrenceType) -> Self {
        match value {
            RecurrenceType::Daily => Self::Daily,
            RecurrenceType::Weekly => Self::Weekly,
            RecurrenceType::Monthly => Self::Monthly,
            RecurrenceType::Yearly => Self::Yearly,
        }
    }
}

impl std::fmt::Display for RepeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(Self::None);
        }
        s.parse::<RecurrenceType>().map(Self::from)
    }
}
