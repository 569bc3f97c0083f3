//! Month-11 anchors and leap-month placement.
//!
//! A lunar year is framed by two consecutive "month 11" starts: the new moon
//! that begins the month containing the December solstice. Twelve lunations
//! fit between most pairs; when thirteen do, one of them contains no
//! principal solar term and becomes the leap month.

use amlich_astro::{lunation_before, nearest_lunation, new_moon_day, sun_longitude_sector};
use amlich_time::date_to_jdn;
use tracing::{debug, trace};

/// Day number on which the reference lunation's mean new moon is counted.
const LUNATION_EPOCH_DAY: f64 = 2_415_021.0;

/// Sector the Sun enters at the December solstice (270°).
const SOLSTICE_SECTOR: u8 = 9;

/// Longest scan for a month without a principal term.
const MAX_LEAP_SCAN: u32 = 14;

/// Day number of the first day of lunar month 11 in solar `year`.
pub fn month11_start(year: i32, tz_hours: f64) -> i64 {
    let off = date_to_jdn(31, 12, year) as f64 - LUNATION_EPOCH_DAY;
    let k = (off / amlich_astro::SYNODIC_MONTH_DAYS).floor() as i64;
    let start = new_moon_day(k, tz_hours);
    if sun_longitude_sector(start, tz_hours) >= SOLSTICE_SECTOR {
        trace!(year, k, "new moon falls after the solstice, month 11 is one lunation earlier");
        new_moon_day(k - 1, tz_hours)
    } else {
        start
    }
}

/// Offset (1..=13) of the leap month counted in lunations after the month
/// 11 that starts on day `a11`.
///
/// Scans forward until two consecutive new moons see the Sun in the same
/// sector, i.e. the lunation between them has no principal term. Only
/// meaningful for a year that holds thirteen lunations.
pub fn leap_month_offset(a11: i64, tz_hours: f64) -> u32 {
    let k = nearest_lunation(a11);
    let mut i = 1;
    let mut arc = sun_longitude_sector(new_moon_day(k + 1, tz_hours), tz_hours);
    loop {
        let last = arc;
        i += 1;
        arc = sun_longitude_sector(new_moon_day(k + i64::from(i), tz_hours), tz_hours);
        if arc == last || i >= MAX_LEAP_SCAN {
            break;
        }
    }
    debug!(a11, offset = i - 1, "leap month located");
    i - 1
}

/// The span between two month-11 starts, with its leap month if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYearFrame {
    /// Day number starting month 11 at the beginning of the span.
    pub a11: i64,
    /// Day number starting month 11 at the end of the span.
    pub b11: i64,
    /// Leap month offset from `a11`, present for thirteen-lunation spans.
    pub leap_offset: Option<u32>,
}

impl LunarYearFrame {
    /// Frame from two known anchors.
    pub fn from_anchors(a11: i64, b11: i64, tz_hours: f64) -> Self {
        let leap_offset = (b11 - a11 > 365).then(|| leap_month_offset(a11, tz_hours));
        Self {
            a11,
            b11,
            leap_offset,
        }
    }

    /// Frame starting at month 11 of solar `year`.
    pub fn starting_in(year: i32, tz_hours: f64) -> Self {
        Self::from_anchors(
            month11_start(year, tz_hours),
            month11_start(year + 1, tz_hours),
            tz_hours,
        )
    }

    /// Frame holding lunar `month` of lunar `year`.
    ///
    /// Months 11 and 12 belong to the frame that starts in the same year;
    /// months 1..=10 to the one that started the year before.
    pub fn containing(month: u32, year: i32, tz_hours: f64) -> Self {
        if month < 11 {
            Self::starting_in(year - 1, tz_hours)
        } else {
            Self::starting_in(year, tz_hours)
        }
    }

    /// Lunation index of the new moon at `a11`.
    pub fn first_lunation(&self) -> i64 {
        nearest_lunation(self.a11)
    }

    /// Number of the month the leap month repeats, if any.
    pub fn leap_month(&self) -> Option<u32> {
        // Offset 1 follows month 11, offset 2 follows month 12, offset 3 month 1, ...
        self.leap_offset.map(|off| (off + 9) % 12 + 1)
    }
}

/// Day number of the latest new moon on or before `day_number`.
///
/// The mean-lunation estimate can be off by one either way, so the index is
/// walked until its new moon brackets the day.
pub(crate) fn month_start_for(day_number: i64, tz_hours: f64) -> i64 {
    let mut k = lunation_before(day_number);
    while new_moon_day(k + 1, tz_hours) <= day_number {
        k += 1;
    }
    let mut start = new_moon_day(k, tz_hours);
    while start > day_number {
        k -= 1;
        start = new_moon_day(k, tz_hours);
    }
    start
}
