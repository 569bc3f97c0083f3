//! Julian Day Number arithmetic and solar calendar dates.
//!
//! This crate provides:
//! - Calendar date ↔ Julian Day Number conversion with the 1582 Gregorian cutover
//! - A `SolarDate` value type with parsing and validation for input boundaries
//! - Weekday indexing from the day number

pub mod error;
pub mod julian;
pub mod solar_date;

pub use error::TimeError;
pub use julian::{GREGORIAN_CUTOVER_JDN, date_to_jdn, jdn_to_date, weekday_index};
pub use solar_date::{SolarDate, days_in_month, is_leap_year};
