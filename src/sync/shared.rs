//! 中断安全的共享日历上下文
//!
//! 设置时间的路径可能运行在中断里，读取路径运行在主循环，
//! 年秒缓存的更新必须整体可见。这里用 `critical_section::Mutex`
//! 包裹整个 [`Calendar`]，读写都在临界区内完成。

use core::cell::Cell;

use critical_section::Mutex;

use crate::calendar::{BrokenDownTime, Calendar, ElapsedSeconds};
use crate::error::Result;

/// 可放在 `static` 中的共享日历
///
/// # 示例
///
/// ```rust
/// use apt_rtc::calendar::BrokenDownTime;
/// use apt_rtc::sync::SharedCalendar;
///
/// static CALENDAR: SharedCalendar = SharedCalendar::new();
///
/// let now = BrokenDownTime::new(24, 5, 20, 9, 0, 0);
/// let ticks = CALENDAR.set_reference(&now).unwrap();
/// assert_eq!(CALENDAR.from_elapsed_seconds(ticks).unwrap(), now);
/// ```
pub struct SharedCalendar {
    inner: Mutex<Cell<Calendar>>,
}

impl SharedCalendar {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(Calendar::new())),
        }
    }

    /// 取得当前上下文的副本
    pub fn snapshot(&self) -> Calendar {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// 整体替换上下文
    pub fn replace(&self, calendar: Calendar) -> Calendar {
        critical_section::with(|cs| self.inner.borrow(cs).replace(calendar))
    }

    /// 重建年秒缓存，失败时保持原缓存不变
    ///
    /// 新缓存只取决于 `time`，校验与计算 (含日志输出) 在临界区外完成，
    /// 临界区内只做一次整体写入。
    pub fn set_reference(&self, time: &BrokenDownTime) -> Result<ElapsedSeconds> {
        let (calendar, elapsed) = Calendar::anchored(time)?;
        self.replace(calendar);
        Ok(elapsed)
    }

    pub fn to_elapsed_seconds(&self, time: &BrokenDownTime) -> Result<ElapsedSeconds> {
        self.snapshot().to_elapsed_seconds(time)
    }

    pub fn from_elapsed_seconds(&self, elapsed: ElapsedSeconds) -> Result<BrokenDownTime> {
        self.snapshot().from_elapsed_seconds(elapsed)
    }
}

impl Default for SharedCalendar {
    fn default() -> Self {
        Self::new()
    }
}
