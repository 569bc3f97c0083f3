//! Lunar calendar date value type.

use std::fmt::{Display, Formatter};

/// A day in the Vietnamese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Day of the lunar month, 1..=30.
    pub day: u32,
    /// Month number, 1..=12. A leap month repeats the number of the month before it.
    pub month: u32,
    /// Lunar year; changes at Tết, not on 1 January.
    pub year: i32,
    /// Whether `month` is the intercalary (nhuận) month of its year.
    pub leap: bool,
}

impl LunarDate {
    pub const fn new(day: u32, month: u32, year: i32, leap: bool) -> Self {
        Self {
            day,
            month,
            year,
            leap,
        }
    }

    /// First day of the month (mùng 1).
    pub fn is_first_day(&self) -> bool {
        self.day == 1
    }

    /// Fifteenth day of the month (rằm).
    pub fn is_full_moon_day(&self) -> bool {
        self.day == 15
    }
}

impl Display for LunarDate {
    /// `D/M/YYYY`, with ` (nhuận)` after the month of a leap month.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let leap = if self.leap { " (nhuận)" } else { "" };
        write!(f, "{}/{}{}/{}", self.day, self.month, leap, self.year)
    }
}
