use crate::config::BASE_YEAR;

use super::weekday::{weekday_of, Weekday};

/// 分解后的日历时间
///
/// 相等、哈希与排序只看年、月、日、时、分、秒 (按此顺序比较)。
/// 星期由日期推导，不参与比较，也不作为任何换算的输入。
#[derive(Debug, Clone, Copy)]
pub struct BrokenDownTime {
    /// 相对 [`BASE_YEAR`] 的年偏移
    pub year: u8,
    /// 月份，1..=12
    pub month: u8,
    /// 日期，从 1 起
    pub day: u8,
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=59
    pub second: u8,
    /// 星期编号 1..=7，见 [`Weekday`]
    pub weekday: u8,
}

impl BrokenDownTime {
    /// 创建日历时间，星期由日期计算得出
    ///
    /// 不做合法性检查，换算入口会统一校验。
    pub const fn new(year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday: weekday_of(year, month, day),
        }
    }

    /// 公历年份
    pub const fn full_year(&self) -> i32 {
        BASE_YEAR + self.year as i32
    }

    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::from_number(self.weekday)
    }

    fn key(&self) -> (u8, u8, u8, u8, u8, u8) {
        (self.year, self.month, self.day, self.hour, self.minute, self.second)
    }
}

impl PartialEq for BrokenDownTime {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BrokenDownTime {}

impl PartialOrd for BrokenDownTime {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BrokenDownTime {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl core::hash::Hash for BrokenDownTime {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl core::fmt::Display for BrokenDownTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.full_year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}
