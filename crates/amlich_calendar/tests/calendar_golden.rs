//! Conversions checked against the published Vietnamese calendar.

use amlich_calendar::{
    LunarDate, SolarDate, WeekdayNames, day_in_week, lunar_to_solar, lunar_year_info,
    solar_to_lunar, zodiac_day,
};

const TZ_VN: f64 = 7.0;

/// Tết (1/1) by lunar year.
const TET: [(i32, (u32, u32, i32)); 10] = [
    (2020, (25, 1, 2020)),
    (2021, (12, 2, 2021)),
    (2022, (1, 2, 2022)),
    (2023, (22, 1, 2023)),
    (2024, (10, 2, 2024)),
    (2025, (29, 1, 2025)),
    (2026, (17, 2, 2026)),
    (2027, (6, 2, 2027)),
    (2030, (2, 2, 2030)),
    (2034, (19, 2, 2034)),
];

/// Leap month by lunar year.
const LEAP_MONTHS: [(i32, u32); 15] = [
    (1995, 8),
    (1998, 5),
    (2001, 4),
    (2004, 2),
    (2006, 7),
    (2009, 5),
    (2012, 4),
    (2014, 9),
    (2017, 6),
    (2020, 4),
    (2023, 2),
    (2025, 6),
    (2028, 5),
    (2031, 3),
    (2033, 11),
];

fn solar((d, m, y): (u32, u32, i32)) -> SolarDate {
    SolarDate::new(d, m, y)
}

#[test]
fn tet_dates() {
    for (year, date) in TET {
        let tet = LunarDate::new(1, 1, year, false);
        assert_eq!(lunar_to_solar(tet, TZ_VN), Ok(solar(date)), "{year}");
        assert_eq!(solar_to_lunar(solar(date), TZ_VN), tet, "{year}");
    }
}

#[test]
fn leap_months() {
    for (year, month) in LEAP_MONTHS {
        assert_eq!(lunar_year_info(year, TZ_VN).leap_month, Some(month), "{year}");
    }
    for year in [2022, 2024, 2026, 2027] {
        assert_eq!(lunar_year_info(year, TZ_VN).leap_month, None, "{year}");
    }
}

#[test]
fn months_of_2023() {
    let expected = [
        (1, false, (22, 1, 2023)),
        (2, false, (20, 2, 2023)),
        (2, true, (22, 3, 2023)),
        (3, false, (20, 4, 2023)),
        (4, false, (19, 5, 2023)),
        (5, false, (18, 6, 2023)),
        (6, false, (18, 7, 2023)),
        (7, false, (16, 8, 2023)),
        (8, false, (15, 9, 2023)),
        (9, false, (15, 10, 2023)),
        (10, false, (13, 11, 2023)),
        (11, false, (13, 12, 2023)),
        (12, false, (11, 1, 2024)),
    ];
    let info = lunar_year_info(2023, TZ_VN);
    let got: Vec<_> = info.months.iter().map(|m| (m.month, m.leap, m.start)).collect();
    let want: Vec<_> = expected.iter().map(|&(m, l, d)| (m, l, solar(d))).collect();
    assert_eq!(got, want);
}

#[test]
fn leap_eleventh_month_2033() {
    let info = lunar_year_info(2033, TZ_VN);
    assert_eq!(info.months.len(), 13);
    let leap = info.months[11];
    assert_eq!((leap.month, leap.leap), (11, true));
    assert_eq!(leap.start, SolarDate::new(22, 12, 2033));
    assert_eq!(info.months[12].start, SolarDate::new(20, 1, 2034));
    assert_eq!(
        solar_to_lunar(SolarDate::new(21, 1, 2034), TZ_VN),
        LunarDate::new(2, 12, 2033, false)
    );
}

#[test]
fn assorted_dates() {
    let cases = [
        ((1, 1, 1800), LunarDate::new(7, 12, 1799, false)),
        ((1, 1, 1900), LunarDate::new(1, 12, 1899, false)),
        ((1, 1, 2000), LunarDate::new(25, 11, 1999, false)),
        ((17, 1, 2026), LunarDate::new(29, 11, 2025, false)),
        ((5, 2, 2026), LunarDate::new(18, 12, 2025, false)),
        ((18, 10, 2026), LunarDate::new(9, 9, 2026, false)),
        ((31, 12, 2100), LunarDate::new(1, 12, 2100, false)),
    ];
    for (date, lunar) in cases {
        assert_eq!(solar_to_lunar(solar(date), TZ_VN), lunar, "{date:?}");
    }
}

#[test]
fn timezone_sensitive_new_year() {
    assert_eq!(
        solar_to_lunar(SolarDate::new(17, 2, 2007), 7.0),
        LunarDate::new(1, 1, 2007, false)
    );
    assert_eq!(
        solar_to_lunar(SolarDate::new(18, 2, 2007), 8.0),
        LunarDate::new(1, 1, 2007, false)
    );
}

#[test]
fn day_names() {
    let cases = [
        ((10, 2, 2024), "Giáp Thìn", "Thứ 7"),
        ((1, 1, 2000), "Mậu Ngọ", "Thứ 7"),
        ((18, 10, 2026), "Ất Sửu", "Chủ nhật"),
        ((22, 1, 2023), "Canh Thìn", "Chủ nhật"),
    ];
    for (date, can_chi, weekday) in cases {
        let d = solar(date);
        assert_eq!(zodiac_day(d).to_string(), can_chi, "{date:?}");
        assert_eq!(day_in_week(d, WeekdayNames::Vietnamese), weekday, "{date:?}");
    }
}
