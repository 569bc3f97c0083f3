//! Solar (Gregorian) calendar date value type.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{date_to_jdn, jdn_to_date};

/// A day in the solar calendar.
///
/// The conversion routines accept any field values; use [`SolarDate::is_valid`]
/// or the [`FromStr`] impl where input comes from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl SolarDate {
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Validated constructor.
    pub fn try_new(day: u32, month: u32, year: i32) -> Result<Self, TimeError> {
        let date = Self::new(day, month, year);
        if date.is_valid() {
            Ok(date)
        } else {
            Err(TimeError::InvalidDate { day, month, year })
        }
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        date_to_jdn(self.day, self.month, self.year)
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        jdn_to_date(jdn)
    }

    /// Whether month and day-of-month name a real day.
    pub fn is_valid(self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.month, self.year)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: SolarDate) -> i64 {
        other.jdn() - self.jdn()
    }
}

impl PartialOrd for SolarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SolarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for SolarDate {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD` or `DD/MM/YYYY`. The ISO form takes a signed
    /// year (`-0044-03-15`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Split after the sign so it stays with the year.
        let sign_len = usize::from(s.starts_with(['-', '+']));
        let (day, month, year) = if let Some((y, rest)) = s[sign_len..].split_once('-') {
            let (m, d) = rest
                .split_once('-')
                .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")))?;
            (d, m, &s[..sign_len + y.len()])
        } else {
            let parts: Vec<&str> = s.split('/').collect();
            if parts.len() != 3 {
                return Err(TimeError::Parse(format!(
                    "expected YYYY-MM-DD or DD/MM/YYYY, got {s}"
                )));
            }
            (parts[0], parts[1], parts[2])
        };
        let day: u32 = day.parse().map_err(|e| TimeError::Parse(format!("day: {e}")))?;
        let month: u32 = month
            .parse()
            .map_err(|e| TimeError::Parse(format!("month: {e}")))?;
        let year: i32 = year
            .parse()
            .map_err(|e| TimeError::Parse(format!("year: {e}")))?;
        Self::try_new(day, month, year)
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, 0 for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
