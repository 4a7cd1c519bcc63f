//! 日历日期与日序号互换
//!
//! 日序号从 [`EPOCH_YEAR`] 年 1 月 1 日 (序号 0) 起算。
//! 正向换算按"每四年一闰"累计闰日，不处理世纪年例外；
//! `config` 中的编译期断言保证支持窗口内两种规则一致。

use crate::config::{DAYS_PER_FOUR_YEARS, EPOCH_YEAR};

use super::tables::{cumulative_days, days_in_month, days_in_year, is_leap};

/// `EPOCH_YEAR` 到 `full_year` 之前 (不含) 的闰日数
const fn leap_days_before(full_year: i32) -> i32 {
    (full_year - 1).div_euclid(4) - (EPOCH_YEAR - 1).div_euclid(4)
}

/// 日历日期转换为日序号
///
/// `month` 为 1..=12，`day` 从 1 起且不超过当月天数。
/// 月份、日期非法或年份早于 `EPOCH_YEAR` 时返回 `None`。
pub const fn calendar_to_days(full_year: i32, month: u8, day: u8) -> Option<i32> {
    if full_year < EPOCH_YEAR {
        return None;
    }
    let leap = is_leap(full_year);
    match days_in_month(month, leap) {
        Some(last) if day >= 1 && day <= last => {}
        _ => return None,
    }

    let mut days = (full_year - EPOCH_YEAR) * 365;
    days += leap_days_before(full_year);
    days += cumulative_days((month - 1) as usize, leap);
    Some(days + (day as i32 - 1))
}

/// 日序号转换为 `(年, 月, 日)`，月、日均从 1 起
///
/// `days` 为负时返回 `None`。
pub fn days_to_calendar(days: i32) -> Option<(i32, u8, u8)> {
    if days < 0 {
        return None;
    }

    // 先按四年周期逼近，再逐年扣除
    let periods = days / DAYS_PER_FOUR_YEARS;
    let mut remaining = days - periods * DAYS_PER_FOUR_YEARS;
    let mut year = EPOCH_YEAR + periods * 4;

    loop {
        let length = days_in_year(year);
        if remaining < length {
            break;
        }
        remaining -= length;
        year += 1;
    }

    let leap = is_leap(year);
    let index = month_index_containing(remaining, leap);
    let day = remaining - cumulative_days(index, leap) + 1;

    Some((year, index as u8 + 1, day as u8))
}

/// 找到第一个 `cumulative_days(i + 1) > day_of_year` 的月份下标 `i`
fn month_index_containing(day_of_year: i32, leap: bool) -> usize {
    let mut low = 0usize;
    let mut high = 11usize;
    while low < high {
        let mid = (low + high) / 2;
        if cumulative_days(mid + 1, leap) > day_of_year {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}
