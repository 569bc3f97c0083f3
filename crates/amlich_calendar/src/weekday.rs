//! Weekday naming.

use amlich_time::{SolarDate, weekday_index};

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All weekdays (index 0 = Monday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Which name table to render a weekday with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayNames {
    /// "Thứ 2" .. "Thứ 7", "Chủ nhật".
    #[default]
    Vietnamese,
    /// "Mon" .. "Sun".
    English,
}

const VIETNAMESE: [&str; 7] = [
    "Thứ 2", "Thứ 3", "Thứ 4", "Thứ 5", "Thứ 6", "Thứ 7", "Chủ nhật",
];
const ENGLISH: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

impl Weekday {
    /// Weekday of a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        ALL_WEEKDAYS[weekday_index(jdn) as usize]
    }

    /// 0-based index (Monday=0 .. Sunday=6).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Name from the chosen table.
    pub fn name(self, names: WeekdayNames) -> &'static str {
        let table = match names {
            WeekdayNames::Vietnamese => &VIETNAMESE,
            WeekdayNames::English => &ENGLISH,
        };
        table[self.index() as usize]
    }
}

/// Name of the weekday `date` falls on.
pub fn day_in_week(date: SolarDate, names: WeekdayNames) -> &'static str {
    Weekday::from_jdn(date.jdn()).name(names)
}
