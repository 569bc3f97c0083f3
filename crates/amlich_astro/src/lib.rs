//! Low-precision lunar and solar series for calendar reckoning.
//!
//! This crate provides:
//! - The instant of the k-th new moon after the 1900 reference lunation
//! - The Sun's apparent ecliptic longitude and its 30-degree sector
//!
//! Both are truncated series after Meeus, *Astronomical Algorithms* (1998).
//! They are accurate to well under an hour within a few centuries of 1900,
//! which is what day-level calendar conversion needs. Accuracy degrades
//! outside roughly 1800..2100.

pub mod new_moon;
pub mod sun;

pub use new_moon::{
    REFERENCE_NEW_MOON_JD, SYNODIC_MONTH_DAYS, lunation_before, nearest_lunation, new_moon_day,
    new_moon_jd,
};
pub use sun::{SECTOR_COUNT, sun_longitude_rad, sun_longitude_sector};
