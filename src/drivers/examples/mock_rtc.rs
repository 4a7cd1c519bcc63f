//! # Mock RTC 计数器
//!
//! 模拟 RTC 秒计数器，用于测试和演示。
//!
//! ## 功能特性
//!
//! - 实现 `Device`, `RtcCounter` trait
//! - 支持启动/停止走时
//! - 通过 `mock_tick()` 模拟时间流逝
//! - 统计计数器写入次数
//! - 可模拟读取之后经过的时间
//!
//! ## 使用示例
//!
//! ```rust
//! use apt_rtc::drivers::examples::MockRtc;
//! use apt_rtc::drivers::{Device, RtcCounter};
//!
//! let mut rtc = MockRtc::new();
//! rtc.init().unwrap();
//! rtc.write_counter(100).unwrap();
//!
//! rtc.mock_tick(5);
//! assert_eq!(rtc.read_counter(), Ok(105));
//! ```

use core::cell::Cell;

use crate::drivers::{Device, DeviceError, RtcCounter};

/// Mock RTC 驱动
///
/// - 使用内部计数器模拟秒寄存器
/// - 初始化后即开始走时
/// - 停止后 `mock_tick()` 不改变计数
pub struct MockRtc {
    /// 当前计数值
    counter: Cell<u32>,
    /// 每次读取后计数器前进的秒数
    read_drift: u32,
    /// 是否正在走时
    running: bool,
    /// 是否已初始化
    initialized: bool,
    /// 计数器写入次数
    write_count: usize,
}

impl MockRtc {
    pub const fn new() -> Self {
        Self {
            counter: Cell::new(0),
            read_drift: 0,
            running: false,
            initialized: false,
            write_count: 0,
        }
    }

    /// 模拟时间流逝（测试用）
    ///
    /// # 参数
    ///
    /// - `seconds`: 经过的秒数
    pub fn mock_tick(&mut self, seconds: u32) {
        if !self.running {
            return;
        }
        self.counter.set(self.counter.get().wrapping_add(seconds));
    }

    /// 设置每次读取后计数器前进的秒数（测试用）
    ///
    /// 模拟驱动读取计数器与后续写入之间经过的时间。
    pub fn set_read_drift(&mut self, seconds: u32) {
        self.read_drift = seconds;
    }

    /// 启动走时
    pub fn start(&mut self) -> Result<(), DeviceError> {
        if !self.initialized {
            return Err(DeviceError::NotInitialized);
        }
        self.running = true;
        Ok(())
    }

    /// 停止走时
    pub fn stop(&mut self) -> Result<(), DeviceError> {
        if !self.initialized {
            return Err(DeviceError::NotInitialized);
        }
        self.running = false;
        Ok(())
    }

    /// 直接查看计数值，不检查初始化状态
    pub fn counter(&self) -> u32 {
        self.counter.get()
    }

    /// 获取计数器写入次数
    pub fn write_count(&self) -> usize {
        self.write_count
    }
}

impl Default for MockRtc {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for MockRtc {
    type Error = DeviceError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.counter.set(0);
        self.read_drift = 0;
        self.write_count = 0;
        self.initialized = true;
        self.running = true;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MockRtc"
    }

    fn is_ready(&self) -> bool {
        self.initialized
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        self.initialized = false;
        self.init()
    }
}

impl RtcCounter for MockRtc {
    fn read_counter(&self) -> Result<u32, Self::Error> {
        if !self.initialized {
            return Err(DeviceError::NotInitialized);
        }
        let ticks = self.counter.get();
        if self.running {
            self.counter.set(ticks.wrapping_add(self.read_drift));
        }
        Ok(ticks)
    }

    fn write_counter(&mut self, ticks: u32) -> Result<(), Self::Error> {
        if !self.initialized {
            return Err(DeviceError::NotInitialized);
        }
        self.counter.set(ticks);
        self.write_count += 1;
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_rtc_new() {
        let rtc = MockRtc::new();
        assert!(!rtc.is_ready());
        assert!(!rtc.is_running());
        assert_eq!(rtc.counter(), 0);
    }

    #[test]
    fn test_mock_rtc_init() {
        let mut rtc = MockRtc::new();
        assert!(rtc.init().is_ok());
        assert!(rtc.is_ready());
        assert!(rtc.is_running());
        assert_eq!(rtc.name(), "MockRtc");
    }

    #[test]
    fn test_mock_rtc_start_stop() {
        let mut rtc = MockRtc::new();
        assert_eq!(rtc.start(), Err(DeviceError::NotInitialized));
        rtc.init().unwrap();

        rtc.stop().unwrap();
        rtc.mock_tick(10);
        assert_eq!(rtc.counter(), 0);

        rtc.start().unwrap();
        rtc.mock_tick(10);
        assert_eq!(rtc.counter(), 10);
    }

    #[test]
    fn test_mock_rtc_write_count() {
        let mut rtc = MockRtc::new();
        rtc.init().unwrap();
        rtc.write_counter(1).unwrap();
        rtc.write_counter(2).unwrap();
        assert_eq!(rtc.write_count(), 2);

        rtc.reset().unwrap();
        assert_eq!(rtc.write_count(), 0);
        assert_eq!(rtc.counter(), 0);
    }

    #[test]
    fn test_mock_rtc_read_drift() {
        let mut rtc = MockRtc::new();
        rtc.init().unwrap();
        rtc.set_read_drift(3);

        assert_eq!(rtc.read_counter(), Ok(0));
        assert_eq!(rtc.read_counter(), Ok(3));
        assert_eq!(rtc.counter(), 6);

        rtc.stop().unwrap();
        assert_eq!(rtc.read_counter(), Ok(6));
        assert_eq!(rtc.counter(), 6);
    }
}
