//! New-moon days and solar sectors checked against the published
//! Vietnamese calendar (UTC+7).

use amlich_astro::{new_moon_day, sun_longitude_sector};
use amlich_time::{SolarDate, jdn_to_date};

const TZ_VN: f64 = 7.0;

/// First days of the lunar months from Tết 2024 to Tết 2025.
const NEW_MOONS_2024: [(i64, (u32, u32, i32)); 13] = [
    (1535, (10, 2, 2024)),
    (1536, (10, 3, 2024)),
    (1537, (9, 4, 2024)),
    (1538, (8, 5, 2024)),
    (1539, (6, 6, 2024)),
    (1540, (6, 7, 2024)),
    (1541, (4, 8, 2024)),
    (1542, (3, 9, 2024)),
    (1543, (3, 10, 2024)),
    (1544, (1, 11, 2024)),
    (1545, (1, 12, 2024)),
    (1546, (31, 12, 2024)),
    (1547, (29, 1, 2025)),
];

#[test]
fn month_starts_2024() {
    for (k, (d, m, y)) in NEW_MOONS_2024 {
        assert_eq!(
            jdn_to_date(new_moon_day(k, TZ_VN)),
            SolarDate::new(d, m, y),
            "lunation {k}"
        );
    }
}

#[test]
fn sectors_are_monotone_through_a_year() {
    let start = SolarDate::new(21, 3, 2024).jdn();
    let mut prev = sun_longitude_sector(start, TZ_VN);
    assert_eq!(prev, 0);
    let mut changes = 0;
    for day in start + 1..start + 365 {
        let s = sun_longitude_sector(day, TZ_VN);
        if s != prev {
            assert_eq!(s, (prev + 1) % 12, "sector jumped on day {day}");
            changes += 1;
        }
        prev = s;
    }
    assert_eq!(changes, 11);
}
