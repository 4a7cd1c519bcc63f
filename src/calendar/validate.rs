use crate::config::{BASE_YEAR, MAX_YEAR_OFFSET, MIN_YEAR_OFFSET};
use crate::error::{Result, RtcError};

use super::tables::{days_in_month, is_leap};
use super::BrokenDownTime;

const MAX_SECOND: u8 = 59;
const MAX_MINUTE: u8 = 59;
const MAX_HOUR: u8 = 23;

/// 检查日历时间各字段是否合法
///
/// 依次检查秒、分、时、月、年，任一越界返回 [`RtcError::OutOfRange`]；
/// 最后检查日期，小于 1 或超过当月天数 (按 `BASE_YEAR + year` 的闰年
/// 状态) 返回 [`RtcError::InvalidDay`]。星期字段不参与检查。
pub fn validate(time: &BrokenDownTime) -> Result<()> {
    if time.second > MAX_SECOND
        || time.minute > MAX_MINUTE
        || time.hour > MAX_HOUR
        || !(1..=12).contains(&time.month)
        || !(MIN_YEAR_OFFSET..=MAX_YEAR_OFFSET).contains(&time.year)
    {
        return Err(RtcError::OutOfRange);
    }

    let leap = is_leap(BASE_YEAR + time.year as i32);
    match days_in_month(time.month, leap) {
        Some(last) if (1..=last).contains(&time.day) => Ok(()),
        _ => Err(RtcError::InvalidDay),
    }
}
