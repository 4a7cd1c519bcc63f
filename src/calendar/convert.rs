//! 秒计数与日历时间互换
//!
//! 硬件计数器保存的不是从纪元起的绝对秒数，而是"同月同日同时刻落在
//! 参考年"时的秒数：闰年使用闰年参考年，平年使用平年参考年。
//! 二者之差即年秒缓存 ([`Calendar::year_seconds`])，每次设置时间时
//! 重新计算，读取时加回即可得到绝对秒数。

use crate::config::{
    BASE_YEAR, MAX_YEAR_OFFSET, MIN_YEAR_OFFSET, REFERENCE_LEAP_YEAR_OFFSET,
    REFERENCE_NONLEAP_YEAR_OFFSET, SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MIN,
};
use crate::error::{Result, RtcError};

use super::days::{calendar_to_days, days_to_calendar};
use super::tables::is_leap;
use super::validate::validate;
use super::BrokenDownTime;

/// 秒计数
pub type ElapsedSeconds = i64;

/// 从纪元起算的绝对秒数，不使用年秒缓存
pub fn absolute_seconds(time: &BrokenDownTime) -> Result<ElapsedSeconds> {
    validate(time)?;
    seconds_since_epoch(time)
}

fn seconds_since_epoch(time: &BrokenDownTime) -> Result<ElapsedSeconds> {
    let days = calendar_to_days(time.full_year(), time.month, time.day)
        .ok_or(RtcError::InvalidDay)? as i64;
    Ok(((days * 24 + time.hour as i64) * 60 + time.minute as i64) * 60 + time.second as i64)
}

/// 年秒缓存上下文
///
/// 记录缓存对应的年偏移，年份不符时换算直接失败，而不是给出错误日期。
///
/// # 示例
///
/// ```rust
/// use apt_rtc::calendar::{BrokenDownTime, Calendar};
/// use apt_rtc::RtcError;
///
/// let mut calendar = Calendar::new();
/// let now = BrokenDownTime::new(23, 6, 1, 8, 0, 0);
/// let ticks = calendar.set_reference(&now).unwrap();
/// assert_eq!(calendar.to_elapsed_seconds(&now), Ok(ticks));
///
/// let other_year = BrokenDownTime::new(24, 6, 1, 8, 0, 0);
/// assert_eq!(calendar.to_elapsed_seconds(&other_year), Err(RtcError::CacheStale));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    reference_year: Option<u8>,
    year_seconds: i64,
}

impl Calendar {
    /// 未锚定的上下文，设置参考时间之前所有换算返回 `CacheStale`
    pub const fn new() -> Self {
        Self {
            reference_year: None,
            year_seconds: 0,
        }
    }

    /// 以 `time` 为参考创建上下文，同时返回 `time` 对应的秒计数
    pub fn anchored(time: &BrokenDownTime) -> Result<(Self, ElapsedSeconds)> {
        let mut calendar = Self::new();
        let elapsed = calendar.set_reference(time)?;
        Ok((calendar, elapsed))
    }

    /// 缓存对应的年偏移
    pub fn reference_year(&self) -> Option<u8> {
        self.reference_year
    }

    /// 当前年份相对参考年贡献的秒数
    pub fn year_seconds(&self) -> i64 {
        self.year_seconds
    }

    pub fn is_anchored(&self) -> bool {
        self.reference_year.is_some()
    }

    /// 以 `time` 所在年份重建年秒缓存，返回应写入计数器的秒数
    ///
    /// 同一月、日、时刻分别放在参考年与实际年计算绝对秒数，
    /// 差值即为实际年份带来的秒数。
    pub fn set_reference(&mut self, time: &BrokenDownTime) -> Result<ElapsedSeconds> {
        if let Err(err) = validate(time) {
            crate::warn!("rejected reference time {}: {}", time, err);
            return Err(err);
        }

        let reference_offset = if is_leap(time.full_year()) {
            REFERENCE_LEAP_YEAR_OFFSET
        } else {
            REFERENCE_NONLEAP_YEAR_OFFSET
        };
        let synthetic = BrokenDownTime {
            year: reference_offset,
            ..*time
        };

        let baseline = seconds_since_epoch(&synthetic)?;
        self.year_seconds = seconds_since_epoch(time)? - baseline;
        self.reference_year = Some(time.year);

        crate::debug!(
            "calendar anchored to {} (year seconds {})",
            BASE_YEAR + time.year as i32,
            self.year_seconds
        );
        Ok(baseline)
    }

    /// 日历时间转换为秒计数
    ///
    /// 先校验输入；缓存未建立或年份不符时返回 `CacheStale`。
    pub fn to_elapsed_seconds(&self, time: &BrokenDownTime) -> Result<ElapsedSeconds> {
        validate(time)?;
        if self.reference_year != Some(time.year) {
            crate::warn!(
                "year-seconds cache built for {:?}, conversion asked for {}",
                self.reference_year,
                time.year
            );
            return Err(RtcError::CacheStale);
        }
        Ok(seconds_since_epoch(time)? - self.year_seconds)
    }

    /// 秒计数转换为日历时间，星期重新计算
    ///
    /// 计数器越过年末后结果可能落在参考年之后的年份，这是合法结果，
    /// 调用者应随后用新年份重新设置参考。
    pub fn from_elapsed_seconds(&self, elapsed: ElapsedSeconds) -> Result<BrokenDownTime> {
        if self.reference_year.is_none() {
            return Err(RtcError::CacheStale);
        }

        let absolute = elapsed
            .checked_add(self.year_seconds)
            .ok_or(RtcError::OutOfRange)?;
        if absolute < 0 {
            return Err(RtcError::OutOfRange);
        }

        let days = absolute / SECS_PER_DAY;
        let mut rest = absolute - days * SECS_PER_DAY;
        let hour = rest / SECS_PER_HOUR;
        rest -= hour * SECS_PER_HOUR;
        let minute = rest / SECS_PER_MIN;
        let second = rest - minute * SECS_PER_MIN;

        let days = i32::try_from(days).map_err(|_| RtcError::OutOfRange)?;
        let (full_year, month, day) = days_to_calendar(days).ok_or(RtcError::OutOfRange)?;
        let year = full_year - BASE_YEAR;
        if year < MIN_YEAR_OFFSET as i32 || year > MAX_YEAR_OFFSET as i32 {
            return Err(RtcError::OutOfRange);
        }

        Ok(BrokenDownTime::new(
            year as u8,
            month,
            day,
            hour as u8,
            minute as u8,
            second as u8,
        ))
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
