//! Error types for solar date parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from reading a solar date at an input boundary.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Text did not match `YYYY-MM-DD` or `DD/MM/YYYY`.
    Parse(String),
    /// Fields parsed but do not name a real calendar day.
    InvalidDate { day: u32, month: u32, year: i32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidDate { day, month, year } => {
                write!(f, "invalid calendar date: {day:02}/{month:02}/{year:04}")
            }
        }
    }
}

impl Error for TimeError {}
