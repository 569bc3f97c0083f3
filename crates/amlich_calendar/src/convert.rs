//! Solar ↔ lunar date conversion.

use amlich_astro::new_moon_day;
use amlich_time::{SolarDate, jdn_to_date};
use tracing::debug;

use crate::anchor::{LunarYearFrame, month_start_for, month11_start};
use crate::error::CalendarError;
use crate::lunar_date::LunarDate;

/// Convert a solar date to the lunar calendar at offset `tz_hours`.
///
/// Total for any input; malformed solar dates give a meaningless result.
pub fn solar_to_lunar(date: SolarDate, tz_hours: f64) -> LunarDate {
    let day_number = date.jdn();
    let month_start = month_start_for(day_number, tz_hours);

    let a11 = month11_start(date.year, tz_hours);
    let (frame, mut year) = if a11 >= month_start {
        let prev = month11_start(date.year - 1, tz_hours);
        (LunarYearFrame::from_anchors(prev, a11, tz_hours), date.year)
    } else {
        let next = month11_start(date.year + 1, tz_hours);
        (LunarYearFrame::from_anchors(a11, next, tz_hours), date.year + 1)
    };

    let day = (day_number - month_start + 1) as u32;
    // Whole lunations since month 11; 29 never overshoots a mean month.
    let diff = (month_start - frame.a11).div_euclid(29);
    let mut month = diff + 11;
    let mut leap = false;
    if let Some(leap_offset) = frame.leap_offset {
        let leap_offset = i64::from(leap_offset);
        if diff >= leap_offset {
            month = diff + 10;
        }
        leap = diff == leap_offset;
    }
    if month > 12 {
        month -= 12;
    }
    if month >= 11 && diff < 4 {
        year -= 1;
    }

    LunarDate::new(day, month as u32, year, leap)
}

/// Convert a lunar date to the solar calendar at offset `tz_hours`.
///
/// Fails with [`CalendarError::NoSuchLeapMonth`] when `lunar.leap` is set but
/// the lunar year has no leap month, or its leap month is not `lunar.month`.
pub fn lunar_to_solar(lunar: LunarDate, tz_hours: f64) -> Result<SolarDate, CalendarError> {
    let frame = LunarYearFrame::containing(lunar.month, lunar.year, tz_hours);
    let mut off = (i64::from(lunar.month) - 11).rem_euclid(12);

    match (frame.leap_offset, frame.leap_month()) {
        (Some(leap_offset), Some(leap_month)) => {
            if lunar.leap && lunar.month != leap_month {
                return Err(no_such_leap_month(lunar));
            }
            if lunar.leap || off >= i64::from(leap_offset) {
                off += 1;
            }
        }
        _ if lunar.leap => return Err(no_such_leap_month(lunar)),
        _ => {}
    }

    let month_start = new_moon_day(frame.first_lunation() + off, tz_hours);
    Ok(jdn_to_date(month_start + i64::from(lunar.day) - 1))
}

fn no_such_leap_month(lunar: LunarDate) -> CalendarError {
    debug!(month = lunar.month, year = lunar.year, "no such leap month");
    CalendarError::NoSuchLeapMonth {
        month: lunar.month,
        year: lunar.year,
    }
}
