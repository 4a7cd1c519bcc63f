// 日历引擎配置

use crate::calendar::tables::is_leap;

/// 年偏移为 0 时对应的公历年份
pub const BASE_YEAR: i32 = 2000;
/// 支持的最小年偏移
pub const MIN_YEAR_OFFSET: u8 = 0;
/// 支持的最大年偏移 (2099 年)
pub const MAX_YEAR_OFFSET: u8 = 99;
/// 日序号 0 所在的年份 (该年 1 月 1 日)
pub const EPOCH_YEAR: i32 = BASE_YEAR + MIN_YEAR_OFFSET as i32;

/// 闰年参考年偏移 (2000 年)
pub const REFERENCE_LEAP_YEAR_OFFSET: u8 = 0;
/// 平年参考年偏移 (2001 年)
pub const REFERENCE_NONLEAP_YEAR_OFFSET: u8 = 1;

pub const SECS_PER_MIN: i64 = 60;
pub const SECS_PER_HOUR: i64 = 60 * SECS_PER_MIN;
pub const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
/// 四年周期的天数 (含一个闰日)
pub const DAYS_PER_FOUR_YEARS: i32 = 4 * 365 + 1;

/// 窗口内每个能被 4 整除的年份都必须是公历闰年，
/// 日序号换算按"每四年一闰"计算，跨过 2100 这类世纪年就会出错。
const fn window_follows_four_year_rule(first: i32, last: i32) -> bool {
    let mut year = first;
    while year <= last {
        if (year % 4 == 0) != is_leap(year) {
            return false;
        }
        year += 1;
    }
    true
}

const _: () = assert!(MIN_YEAR_OFFSET <= MAX_YEAR_OFFSET);
const _: () = assert!(window_follows_four_year_rule(
    BASE_YEAR + MIN_YEAR_OFFSET as i32,
    BASE_YEAR + MAX_YEAR_OFFSET as i32,
));
const _: () = assert!(is_leap(BASE_YEAR + REFERENCE_LEAP_YEAR_OFFSET as i32));
const _: () = assert!(!is_leap(BASE_YEAR + REFERENCE_NONLEAP_YEAR_OFFSET as i32));
const _: () = assert!(REFERENCE_LEAP_YEAR_OFFSET <= MAX_YEAR_OFFSET);
const _: () = assert!(REFERENCE_NONLEAP_YEAR_OFFSET <= MAX_YEAR_OFFSET);
