//! New-moon instants from a truncated lunation series.
//!
//! Lunation `k = 0` is the new moon of 1900-Jan-01 13:52 UT. The series is
//! evaluated in `T = k / 1236.85`, Julian centuries counted in lunations.
//!
//! Source: Meeus, *Astronomical Algorithms* 2nd ed., ch. 49 (abridged).

use std::f64::consts::PI;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Julian Date of lunation 0 as returned by [`new_moon_jd`].
pub const REFERENCE_NEW_MOON_JD: f64 = 2_415_021.076_998_695;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

const DEG_TO_RAD: f64 = PI / 180.0;

/// Julian Date (real-valued, UT) of the k-th new moon after the reference.
pub fn new_moon_jd(k: i64) -> f64 {
    let k = k as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    // Mean new moon.
    let mut jd = 2_415_020.759_33 + 29.530_588_68 * k + 0.000_117_8 * t2 - 0.000_000_155 * t3;
    jd += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * DEG_TO_RAD).sin();

    // Sun's mean anomaly, Moon's mean anomaly, Moon's argument of latitude (degrees).
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mpr = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    let sin = |deg: f64| (deg * DEG_TO_RAD).sin();
    let mut c1 = (0.1734 - 0.000_393 * t) * sin(m) + 0.0021 * sin(2.0 * m);
    c1 = c1 - 0.4068 * sin(mpr) + 0.0161 * sin(2.0 * mpr);
    c1 -= 0.0004 * sin(3.0 * mpr);
    c1 = c1 + 0.0104 * sin(2.0 * f) - 0.0051 * sin(m + mpr);
    c1 = c1 - 0.0074 * sin(m - mpr) + 0.0004 * sin(2.0 * f + m);
    c1 = c1 - 0.0004 * sin(2.0 * f - m) - 0.0006 * sin(2.0 * f + mpr);
    c1 = c1 + 0.0010 * sin(2.0 * f - mpr) + 0.0005 * sin(2.0 * mpr + m);

    jd + c1 - delta_t_days(t)
}

/// Secular correction in days. Two fits: historical (before ~800 AD) and modern.
fn delta_t_days(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    }
}

/// Local calendar day number on which the k-th new moon falls.
///
/// `tz_hours` shifts the instant into local time; the `+0.5` moves from the
/// noon-based Julian Date to a midnight-based civil day.
pub fn new_moon_day(k: i64, tz_hours: f64) -> i64 {
    (new_moon_jd(k) + 0.5 + tz_hours / 24.0).floor() as i64
}

/// Index of the last mean lunation starting at or before `day_number`.
pub fn lunation_before(day_number: i64) -> i64 {
    ((day_number as f64 - REFERENCE_NEW_MOON_JD) / SYNODIC_MONTH_DAYS).floor() as i64
}

/// Index of the mean lunation nearest to `day_number`.
pub fn nearest_lunation(day_number: i64) -> i64 {
    ((day_number as f64 - REFERENCE_NEW_MOON_JD) / SYNODIC_MONTH_DAYS + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_lunation() {
        assert!((new_moon_jd(0) - REFERENCE_NEW_MOON_JD).abs() < 1e-6);
    }

    #[test]
    fn february_2024_new_moon() {
        // 2024-Feb-09 22:59 UT ≈ JD 2460350.458
        let jd = new_moon_jd(1535);
        assert!((jd - 2_460_350.458).abs() < 0.01, "got {jd}");
    }

    #[test]
    fn timezone_moves_day_across_midnight() {
        // 2020-Jul-20 17:33 UT: still the 20th in UT, already the 21st at UTC+7.
        assert_eq!(new_moon_day(1491, 0.0), 2_459_051);
        assert_eq!(new_moon_day(1491, 7.0), 2_459_052);
    }

    #[test]
    fn consecutive_new_moons_are_a_lunation_apart() {
        for k in [-1200, -1, 0, 1, 1500, 2400] {
            let gap = new_moon_jd(k + 1) - new_moon_jd(k);
            assert!((29.2..29.9).contains(&gap), "k={k} gap={gap}");
        }
    }

    #[test]
    fn delta_t_branches_meet() {
        // k = -13606 is the first lunation on the historical fit (T < -11).
        let gap = new_moon_jd(-13_605) - new_moon_jd(-13_606);
        assert!((29.2..29.9).contains(&gap), "gap={gap}");
    }

    #[test]
    fn lunation_indices() {
        // 2024-Feb-10 (JDN 2460351) is the first day of lunation 1535.
        assert_eq!(lunation_before(2_460_351), 1535);
        assert_eq!(nearest_lunation(2_460_351), 1535);
        assert_eq!(lunation_before(2_415_021), -1);
        assert_eq!(nearest_lunation(2_415_021), 0);
    }
}
