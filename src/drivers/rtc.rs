//! # RTC 驱动
//!
//! 把 [`RtcCounter`] 的秒计数与 [`Calendar`] 组合成读写日历时间的驱动。
//!
//! 写入时间时先重建年秒缓存，再把参考年中的秒数写入计数器；
//! 读取时间时把计数值加回年秒缓存再分解。计数器越过年末后，
//! 读取路径会以新年份重新建立缓存并回写计数器。

use crate::calendar::{BrokenDownTime, Calendar, ElapsedSeconds};
use crate::error::{Result, RtcError};

use super::RtcCounter;

/// 基于秒计数器的 RTC 驱动
///
/// # 示例
///
/// ```rust
/// use apt_rtc::calendar::BrokenDownTime;
/// use apt_rtc::drivers::Rtc;
/// use apt_rtc::drivers::examples::MockRtc;
///
/// let mut rtc = Rtc::new(MockRtc::new());
/// rtc.init(&BrokenDownTime::new(24, 2, 28, 23, 59, 0)).unwrap();
///
/// rtc.device_mut().mock_tick(60);
/// assert_eq!(rtc.now().unwrap(), BrokenDownTime::new(24, 2, 29, 0, 0, 0));
/// ```
pub struct Rtc<D> {
    device: D,
    calendar: Calendar,
}

impl<D> Rtc<D>
where
    D: RtcCounter,
    RtcError: From<D::Error>,
{
    pub const fn new(device: D) -> Self {
        Self {
            device,
            calendar: Calendar::new(),
        }
    }

    /// 初始化设备并设置初始时间
    pub fn init(&mut self, time: &BrokenDownTime) -> Result<()> {
        self.device.init()?;
        self.set_time(time)?;
        crate::info!("{} started at {}", self.device.name(), time);
        Ok(())
    }

    /// 设置当前时间
    pub fn set_time(&mut self, time: &BrokenDownTime) -> Result<()> {
        if !self.device.is_ready() {
            return Err(RtcError::NotInitialized);
        }

        self.write_reference(time, 0)
    }

    /// 读取当前时间
    pub fn now(&mut self) -> Result<BrokenDownTime> {
        let ticks = self.device.read_counter()?;
        let time = self.calendar.from_elapsed_seconds(ticks as ElapsedSeconds)?;

        if self.calendar.reference_year() != Some(time.year) {
            crate::debug!("counter crossed into {}, re-anchoring", time.full_year());
            // 解码之后计数器仍在走，回写时补上这段时间
            let drift = self.device.read_counter()?.wrapping_sub(ticks);
            self.write_reference(&time, drift)?;
        }
        Ok(time)
    }

    /// 以 `time` 重建年秒缓存，把 `time` 的计数值加上 `drift` 秒写入计数器
    ///
    /// 计数器写入成功后才提交新的年秒缓存。
    fn write_reference(&mut self, time: &BrokenDownTime, drift: u32) -> Result<()> {
        let mut calendar = self.calendar;
        let elapsed = calendar.set_reference(time)?;
        let ticks = u32::try_from(elapsed)
            .ok()
            .and_then(|ticks| ticks.checked_add(drift))
            .ok_or(RtcError::OutOfRange)?;
        self.device.write_counter(ticks)?;
        self.calendar = calendar;

        crate::trace!("{} counter <- {}", self.device.name(), ticks);
        Ok(())
    }

    /// 计算 `time` 对应的计数值，可用于设置闹钟比较值
    ///
    /// `time` 必须与当前参考时间同年。
    pub fn ticks_for(&self, time: &BrokenDownTime) -> Result<u32> {
        let elapsed = self.calendar.to_elapsed_seconds(time)?;
        u32::try_from(elapsed).map_err(|_| RtcError::OutOfRange)
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// 释放底层设备
    pub fn release(self) -> D {
        self.device
    }
}
