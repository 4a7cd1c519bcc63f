//! 闰年判断与月份天数表
//!
//! 表格按 0 起始的月份下标访问 (`0` = 一月)。对外接口使用 1..=12 的月份，
//! 在边界处转换为 `month - 1`。

/// 闰年各月天数
const LEAP_MONTH_DAYS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// 平年各月天数
const NONLEAP_MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// 平年中各月之前已经过的天数，最后一项为全年天数
const NONLEAP_DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// 公历闰年规则：能被 4 整除且不能被 100 整除，或能被 400 整除
pub const fn is_leap(full_year: i32) -> bool {
    (full_year % 4 == 0 && full_year % 100 != 0) || full_year % 400 == 0
}

/// 一年的天数
pub const fn days_in_year(full_year: i32) -> i32 {
    if is_leap(full_year) { 366 } else { 365 }
}

/// 某月的天数
///
/// `month` 为 1..=12，超出范围返回 `None`。
pub const fn days_in_month(month: u8, leap: bool) -> Option<u8> {
    if month < 1 || month > 12 {
        return None;
    }
    let index = (month - 1) as usize;
    if leap {
        Some(LEAP_MONTH_DAYS[index])
    } else {
        Some(NONLEAP_MONTH_DAYS[index])
    }
}

/// 某月之前已经过的天数
///
/// `month_index` 为 0 起始下标，取值 0..=12；12 表示全年天数，
/// 超出范围返回 `None`。闰年从三月 (下标 2) 起多计一天。
pub const fn days_before_month(month_index: usize, leap: bool) -> Option<i32> {
    if month_index > 12 {
        return None;
    }
    Some(cumulative_days(month_index, leap))
}

/// 下标已确认在 0..=12 内的 [`days_before_month`]
pub(crate) const fn cumulative_days(month_index: usize, leap: bool) -> i32 {
    let days = NONLEAP_DAYS_BEFORE_MONTH[month_index] as i32;
    if month_index >= 2 && leap {
        days + 1
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(2023));
        assert!(!is_leap(1900));
        assert!(!is_leap(2100));
        assert!(is_leap(2400));
    }

    #[test]
    fn test_february_length() {
        assert_eq!(days_in_month(2, true), Some(29));
        assert_eq!(days_in_month(2, false), Some(28));
        assert_eq!(days_in_month(0, false), None);
        assert_eq!(days_in_month(13, true), None);
    }

    #[test]
    fn test_days_before_month_matches_month_lengths() {
        for leap in [false, true] {
            let mut total = 0;
            for month in 1..=12u8 {
                assert_eq!(days_before_month((month - 1) as usize, leap), Some(total));
                total += days_in_month(month, leap).unwrap() as i32;
            }
            assert_eq!(days_before_month(12, leap), Some(total));
        }
        assert_eq!(days_before_month(12, true), Some(366));
        assert_eq!(days_before_month(1, true), Some(31));
        assert_eq!(days_before_month(2, true), Some(60));
    }

    #[test]
    fn test_days_before_month_rejects_bad_index() {
        assert_eq!(days_before_month(13, false), None);
        assert_eq!(days_before_month(usize::MAX, true), None);
    }
}
