//! Month layout of a whole lunar year.

use amlich_time::SolarDate;

use crate::can_chi::{CanChi, zodiac_year};
use crate::convert::lunar_to_solar;
use crate::lunar_date::LunarDate;

/// First day and length of one lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthStart {
    pub month: u32,
    pub leap: bool,
    /// Solar date of day 1.
    pub start: SolarDate,
    /// 29 or 30.
    pub days: u32,
}

/// Lunar year summary: name, leap month and every month start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYearInfo {
    pub year: i32,
    pub can_chi: CanChi,
    pub leap_month: Option<u32>,
    /// Months in calendar order, a leap month right after its namesake.
    pub months: Vec<LunarMonthStart>,
}

impl LunarYearInfo {
    /// Days from Tết of this year to Tết of the next.
    pub fn total_days(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }

    /// Solar date of Tết (1/1).
    pub fn tet(&self) -> Option<SolarDate> {
        self.months.first().map(|m| m.start)
    }
}

/// Lay out lunar `year` at offset `tz_hours`.
pub fn lunar_year_info(year: i32, tz_hours: f64) -> LunarYearInfo {
    let mut starts: Vec<(u32, bool, SolarDate)> = Vec::with_capacity(14);
    let mut leap_month = None;
    for month in 1..=12 {
        for leap in [false, true] {
            if let Ok(start) = lunar_to_solar(LunarDate::new(1, month, year, leap), tz_hours) {
                if leap {
                    leap_month = Some(month);
                }
                starts.push((month, leap, start));
            }
        }
    }
    if let Ok(next_tet) = lunar_to_solar(LunarDate::new(1, 1, year + 1, false), tz_hours) {
        starts.push((1, false, next_tet));
    }

    let months = starts
        .windows(2)
        .map(|w| {
            let (month, leap, start) = w[0];
            LunarMonthStart {
                month,
                leap,
                start,
                days: start.days_until(w[1].2) as u32,
            }
        })
        .collect();

    LunarYearInfo {
        year,
        can_chi: zodiac_year(year),
        leap_month,
        months,
    }
}
