//! Error types for lunar calendar operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use amlich_time::TimeError;

/// Errors from lunar calendar conversion and configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// A leap month was requested that the lunar year does not have.
    NoSuchLeapMonth { month: u32, year: i32 },
    /// Invalid configuration parameter.
    InvalidConfig(&'static str),
    /// Error from solar date parsing/validation.
    Time(TimeError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchLeapMonth { month, year } => {
                write!(f, "lunar year {year} has no leap month {month}")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for CalendarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
