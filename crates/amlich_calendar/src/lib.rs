//! Vietnamese lunisolar calendar (âm lịch) built on truncated lunar and
//! solar series.
//!
//! This crate provides:
//! - Solar → lunar and lunar → solar date conversion, leap months included
//! - Can-chi (sexagenary) names for years, months and days
//! - Weekday names in Vietnamese or English
//! - Lunar year summaries and a per-day snapshot for host integrations
//!
//! Every function is pure. Conversions take the local time-zone offset in
//! hours; Vietnam uses UTC+7 ([`DEFAULT_TZ_HOURS`]).
//!
//! ```
//! use amlich_calendar::{LunarDate, SolarDate, lunar_to_solar, solar_to_lunar, zodiac_year};
//!
//! let tet = solar_to_lunar(SolarDate::new(10, 2, 2024), 7.0);
//! assert_eq!(tet, LunarDate::new(1, 1, 2024, false));
//! assert_eq!(lunar_to_solar(tet, 7.0), Ok(SolarDate::new(10, 2, 2024)));
//! assert_eq!(zodiac_year(tet.year).to_string(), "Giáp Thìn");
//! ```

pub mod anchor;
pub mod can_chi;
pub mod config;
pub mod convert;
pub mod day_info;
pub mod error;
pub mod lunar_date;
pub mod weekday;
pub mod year;

pub use anchor::{LunarYearFrame, leap_month_offset, month11_start};
pub use can_chi::{
    ALL_CAN, ALL_CHI, Can, CanChi, Chi, MONTH_BRANCHES, zodiac_day, zodiac_month, zodiac_year,
};
pub use config::{CalendarConfig, DEFAULT_TZ_HOURS};
pub use convert::{lunar_to_solar, solar_to_lunar};
pub use day_info::{DayInfo, MoonMarker, Upcoming};
pub use error::CalendarError;
pub use lunar_date::LunarDate;
pub use weekday::{ALL_WEEKDAYS, Weekday, WeekdayNames, day_in_week};
pub use year::{LunarMonthStart, LunarYearInfo, lunar_year_info};

// Re-export the solar side so callers only need this crate.
pub use amlich_time::{SolarDate, TimeError};
