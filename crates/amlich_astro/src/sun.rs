//! Apparent solar longitude from a truncated equation of centre.
//!
//! Source: Meeus, *Astronomical Algorithms* 2nd ed., ch. 25 (low accuracy).

use std::f64::consts::{PI, TAU};

/// Number of 30-degree sectors on the ecliptic.
pub const SECTOR_COUNT: u8 = 12;

const J2000_JD: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const DEG_TO_RAD: f64 = PI / 180.0;

/// Sun's ecliptic longitude in radians, in `[0, 2π)`, at Julian Date `jd`.
pub fn sun_longitude_rad(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;

    // Mean anomaly and mean longitude (degrees).
    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2;
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;

    let mut c = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (DEG_TO_RAD * m).sin();
    c += (0.019_993 - 0.000_101 * t) * (DEG_TO_RAD * 2.0 * m).sin()
        + 0.000_290 * (DEG_TO_RAD * 3.0 * m).sin();

    let lon = (l0 + c) * DEG_TO_RAD;
    lon - TAU * (lon / TAU).floor()
}

/// 30-degree sector (0..=11) of the Sun's longitude at local midnight
/// starting day `day_number`.
///
/// Sector 0 begins at the March equinox, 3 at the June solstice, 6 at the
/// September equinox and 9 at the December solstice.
pub fn sun_longitude_sector(day_number: i64, tz_hours: f64) -> u8 {
    let jd = day_number as f64 - 0.5 - tz_hours / 24.0;
    let sector = (sun_longitude_rad(jd) / PI * 6.0).floor() as u8;
    sector.min(SECTOR_COUNT - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_longitude() {
        // ~280.38 deg at 2000-Jan-01 12:00 TT
        let deg = sun_longitude_rad(J2000_JD).to_degrees();
        assert!((deg - 280.38).abs() < 0.01, "got {deg}");
    }

    #[test]
    fn stays_in_range_before_j2000() {
        for jd in [2_378_497.0, 2_415_020.5, 2_440_000.0, 2_451_544.0] {
            let lon = sun_longitude_rad(jd);
            assert!((0.0..TAU).contains(&lon), "jd={jd} lon={lon}");
        }
    }

    #[test]
    fn sectors_around_2024_equinox() {
        // JDN 2460390 = 2024-Mar-20, 2460391 = 2024-Mar-21 (UTC+7)
        assert_eq!(sun_longitude_sector(2_460_390, 7.0), 11);
        assert_eq!(sun_longitude_sector(2_460_391, 7.0), 0);
    }

    #[test]
    fn sectors_around_2024_december_solstice() {
        // JDN 2460666 = 2024-Dec-21, 2460667 = 2024-Dec-22
        assert_eq!(sun_longitude_sector(2_460_666, 7.0), 8);
        assert_eq!(sun_longitude_sector(2_460_667, 7.0), 9);
    }
}
