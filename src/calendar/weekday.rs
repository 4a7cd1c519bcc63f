use crate::config::BASE_YEAR;

/// 星期，编号 1 (周一) ..= 7 (周日)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    pub fn from_number(number: u8) -> Option<Weekday> {
        match number {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl core::fmt::Display for Weekday {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// 根据日期计算星期编号 (1..=7)
///
/// 基姆拉尔森公式：一、二月视为上一年的 13、14 月。
pub const fn weekday_number(full_year: i32, month: u8, day: u8) -> u8 {
    let (year, month) = match month {
        1 => (full_year - 1, 13),
        2 => (full_year - 1, 14),
        m => (full_year, m as i32),
    };

    let mut week = day as i32;
    week += 2 * month;
    week += 3 * (month + 1) / 5;
    week += year;
    week += year / 4;
    week -= year / 100;
    week += year / 400;

    (week.rem_euclid(7) + 1) as u8
}

/// 按年偏移计算星期
pub const fn weekday_of(year_offset: u8, month: u8, day: u8) -> u8 {
    weekday_number(BASE_YEAR + year_offset as i32, month, day)
}
