//! Everything a calendar display needs about one solar day.

use amlich_time::SolarDate;

use crate::anchor::LunarYearFrame;
use crate::can_chi::{CanChi, zodiac_day, zodiac_month, zodiac_year};
use crate::config::CalendarConfig;
use crate::convert::{lunar_to_solar, solar_to_lunar};
use crate::error::CalendarError;
use crate::lunar_date::LunarDate;
use crate::weekday::{WeekdayNames, day_in_week};

/// Offset used to place upcoming 1st/15th days. Lunar month boundaries are
/// looked up at UTC for these.
const UPCOMING_TZ_HOURS: f64 = 0.0;

/// Whether the day is a 1st, a 15th, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonMarker {
    /// Lunar day 1.
    NewMoon,
    /// Lunar day 15.
    FullMoon,
    Ordinary,
}

impl MoonMarker {
    /// Marker for the lunar day of `lunar`.
    pub fn of(lunar: &LunarDate) -> Self {
        if lunar.is_first_day() {
            Self::NewMoon
        } else if lunar.is_full_moon_day() {
            Self::FullMoon
        } else {
            Self::Ordinary
        }
    }

    /// Vietnamese label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "Mùng 1",
            Self::FullMoon => "Rằm",
            Self::Ordinary => "Không",
        }
    }
}

/// A 1st or 15th still ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upcoming {
    pub solar: SolarDate,
    pub lunar_month: u32,
    pub lunar_year: i32,
    /// Whether the target month is the leap month.
    pub leap: bool,
    /// Days from the reference day; 0 when it is the same day.
    pub days_until: i64,
}

/// Snapshot of one solar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayInfo {
    pub solar: SolarDate,
    pub lunar: LunarDate,
    /// Vietnamese weekday name.
    pub weekday: &'static str,
    pub year_name: CanChi,
    pub month_name: CanChi,
    pub day_name: CanChi,
    pub marker: MoonMarker,
    pub next_first: Option<Upcoming>,
    pub next_fifteenth: Option<Upcoming>,
}

impl DayInfo {
    /// Gather the snapshot for `solar`, checking `config` and the date first.
    pub fn for_date(solar: SolarDate, config: &CalendarConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        SolarDate::try_new(solar.day, solar.month, solar.year)?;

        let lunar = solar_to_lunar(solar, config.tz_hours);

        // Upcoming days are counted from the UTC reading of today, so the
        // month they step from is the one their lookups use.
        let base = solar_to_lunar(solar, UPCOMING_TZ_HOURS);
        let next = following_month(&base);
        let next_first = upcoming(solar, LunarDate { day: 1, ..next });
        let next_fifteenth = if base.day < 15 {
            upcoming(solar, LunarDate { day: 15, ..base })
        } else {
            upcoming(solar, LunarDate { day: 15, ..next })
        };

        Ok(Self {
            solar,
            lunar,
            weekday: day_in_week(solar, WeekdayNames::Vietnamese),
            year_name: zodiac_year(lunar.year),
            month_name: zodiac_month(lunar.month, lunar.year),
            day_name: zodiac_day(solar),
            marker: MoonMarker::of(&lunar),
            next_first,
            next_fifteenth,
        })
    }

    /// Short line such as `9/9 năm Bính Ngọ`.
    pub fn summary(&self) -> String {
        let leap = if self.lunar.leap { " (nhuận)" } else { "" };
        format!(
            "{}/{}{} năm {}",
            self.lunar.day, self.lunar.month, leap, self.year_name
        )
    }
}

/// Month after the one `lunar` falls in; a common month is followed by its
/// leap namesake when the year has one.
fn following_month(lunar: &LunarDate) -> LunarDate {
    let frame = LunarYearFrame::containing(lunar.month, lunar.year, UPCOMING_TZ_HOURS);
    if !lunar.leap && frame.leap_month() == Some(lunar.month) {
        return LunarDate { leap: true, ..*lunar };
    }
    if lunar.month >= 12 {
        LunarDate::new(lunar.day, 1, lunar.year + 1, false)
    } else {
        LunarDate::new(lunar.day, lunar.month + 1, lunar.year, false)
    }
}

fn upcoming(from: SolarDate, target: LunarDate) -> Option<Upcoming> {
    let solar = lunar_to_solar(target, UPCOMING_TZ_HOURS).ok()?;
    Some(Upcoming {
        solar,
        lunar_month: target.month,
        lunar_year: target.year,
        leap: target.leap,
        days_until: from.days_until(solar),
    })
}
