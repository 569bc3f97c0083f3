//! Julian Day Number ↔ calendar date conversion.
//!
//! Fliegel–Van Flandern form. Dates on or after 15 Oct 1582 are read as
//! Gregorian, earlier dates as Julian, so the day count stays continuous
//! across the cutover.
//!
//! Every division here is a floor division.

use crate::solar_date::SolarDate;

/// Day number of 15 Oct 1582, the first Gregorian day.
pub const GREGORIAN_CUTOVER_JDN: i64 = 2_299_161;

/// Julian Day Number of a calendar date.
///
/// No validation: out-of-range day or month values give a plausible but
/// meaningless day number.
pub fn date_to_jdn(day: u32, month: u32, year: i32) -> i64 {
    let day = i64::from(day);
    let month = i64::from(month);
    let a = (14 - month).div_euclid(12);
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;
    let month_days = (153 * m + 2).div_euclid(5);

    let jdn = day + month_days + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    if jdn < GREGORIAN_CUTOVER_JDN {
        day + month_days + 365 * y + y.div_euclid(4) - 32083
    } else {
        jdn
    }
}

/// Calendar date of a Julian Day Number.
pub fn jdn_to_date(jdn: i64) -> SolarDate {
    let (b, c) = if jdn >= GREGORIAN_CUTOVER_JDN {
        let a = jdn + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        (b, a - (146_097 * b).div_euclid(4))
    } else {
        (0, jdn + 32082)
    };
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = b * 100 + d - 4800 + m.div_euclid(10);
    SolarDate::new(day as u32, month as u32, year as i32)
}

/// Weekday of a day number, 0 = Monday … 6 = Sunday.
pub fn weekday_index(jdn: i64) -> u8 {
    jdn.rem_euclid(7) as u8
}
