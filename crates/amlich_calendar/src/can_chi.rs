//! Can-chi (sexagenary) names for years, months and days.
//!
//! Ten heavenly stems (can) and twelve earthly branches (chi) advance
//! together, so each pair recurs every 60 steps.

use std::fmt::{Display, Formatter};

use amlich_time::SolarDate;

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Can {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// All stems in cycle order (index 0 = Giáp).
pub const ALL_CAN: [Can; 10] = [
    Can::Giap,
    Can::At,
    Can::Binh,
    Can::Dinh,
    Can::Mau,
    Can::Ky,
    Can::Canh,
    Can::Tan,
    Can::Nham,
    Can::Quy,
];

impl Can {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
        }
    }

    /// 0-based index (Giáp=0 .. Quý=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for any integer, reduced mod 10.
    pub fn from_index(i: i64) -> Self {
        ALL_CAN[i.rem_euclid(10) as usize]
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Chi {
    Ti,
    Suu,
    Dan,
    Mao,
    Thin,
    Ty,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All branches in cycle order (index 0 = Tí).
pub const ALL_CHI: [Chi; 12] = [
    Chi::Ti,
    Chi::Suu,
    Chi::Dan,
    Chi::Mao,
    Chi::Thin,
    Chi::Ty,
    Chi::Ngo,
    Chi::Mui,
    Chi::Than,
    Chi::Dau,
    Chi::Tuat,
    Chi::Hoi,
];

/// Branch of each lunar month; index 0 is month 1 (Dần).
pub const MONTH_BRANCHES: [Chi; 12] = [
    Chi::Dan,
    Chi::Mao,
    Chi::Thin,
    Chi::Ty,
    Chi::Ngo,
    Chi::Mui,
    Chi::Than,
    Chi::Dau,
    Chi::Tuat,
    Chi::Hoi,
    Chi::Ti,
    Chi::Suu,
];

impl Chi {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ti => "Tí",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ty => "Tị",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }

    /// Zodiac animal in Vietnamese. Mão is the cat, not the rabbit.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ti => "Chuột",
            Self::Suu => "Trâu",
            Self::Dan => "Hổ",
            Self::Mao => "Mèo",
            Self::Thin => "Rồng",
            Self::Ty => "Rắn",
            Self::Ngo => "Ngựa",
            Self::Mui => "Dê",
            Self::Than => "Khỉ",
            Self::Dau => "Gà",
            Self::Tuat => "Chó",
            Self::Hoi => "Lợn",
        }
    }

    /// 0-based index (Tí=0 .. Hợi=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for any integer, reduced mod 12.
    pub fn from_index(i: i64) -> Self {
        ALL_CHI[i.rem_euclid(12) as usize]
    }
}

/// A stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanChi {
    pub can: Can,
    pub chi: Chi,
}

impl CanChi {
    /// Position in the 60-term cycle (Giáp Tí = 0, Quý Hợi = 59).
    ///
    /// Stem and branch share parity in every valid pair; the unique `n` with
    /// `n ≡ can (mod 10)` and `n ≡ chi (mod 12)` is `6·can − 5·chi (mod 60)`.
    pub fn cycle_index(self) -> u8 {
        let can = i32::from(self.can.index());
        let chi = i32::from(self.chi.index());
        (6 * can - 5 * chi).rem_euclid(60) as u8
    }
}

impl Display for CanChi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.can.name(), self.chi.name())
    }
}

/// Can-chi name of lunar `year`.
pub fn zodiac_year(year: i32) -> CanChi {
    let y = i64::from(year);
    CanChi {
        can: Can::from_index(y + 6),
        chi: Chi::from_index(y + 8),
    }
}

/// Can-chi name of a solar day.
pub fn zodiac_day(date: SolarDate) -> CanChi {
    let jdn = date.jdn();
    CanChi {
        can: Can::from_index(jdn + 9),
        chi: Chi::from_index(jdn + 1),
    }
}

/// Can-chi name of lunar `month` in lunar `year`.
///
/// The stem repeats every five years; the branch is fixed per month.
pub fn zodiac_month(month: u32, year: i32) -> CanChi {
    let m = i64::from(month);
    CanChi {
        can: Can::from_index(12 * i64::from(year) + m + 3),
        chi: MONTH_BRANCHES[(m - 1).rem_euclid(12) as usize],
    }
}
