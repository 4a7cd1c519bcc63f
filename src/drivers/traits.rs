//! # 设备驱动 Trait 定义
//!
//! RTC 驱动只依赖一个能读写的秒计数器，寄存器细节由具体芯片实现。
//!
//! ## Trait 层次结构
//!
//! ```text
//! Device (基础设备)
//!    └── RtcCounter (RTC 秒计数器)
//! ```
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use apt_rtc::drivers::{Device, DeviceError, RtcCounter};
//! struct AptRtc {
//!     base_addr: usize,
//! }
//!
//! impl Device for AptRtc {
//!     type Error = DeviceError;
//!
//!     fn init(&mut self) -> Result<(), Self::Error> {
//!         // 使能 RTC 时钟、解除写保护
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "RTC0"
//!     }
//! }
//!
//! impl RtcCounter for AptRtc {
//!     fn read_counter(&self) -> Result<u32, Self::Error> {
//!         // 读取计数寄存器
//!         Ok(0)
//!     }
//!
//!     fn write_counter(&mut self, _ticks: u32) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn is_running(&self) -> bool {
//!         true
//!     }
//! }
//! ```

// ============================================================================
// 基础设备 Trait
// ============================================================================

/// 基础设备 trait
///
/// 所有设备驱动都必须实现此 trait，提供基本的设备管理功能。
pub trait Device {
    /// 设备错误类型
    type Error;

    /// 初始化设备
    ///
    /// 在使用设备之前必须调用此方法进行初始化。
    fn init(&mut self) -> Result<(), Self::Error>;

    /// 获取设备名称，用于调试和日志
    fn name(&self) -> &'static str;

    /// 检查设备是否就绪
    ///
    /// 默认实现返回 `true`，子类可以覆盖此方法。
    fn is_ready(&self) -> bool {
        true
    }

    /// 重置设备
    ///
    /// 将设备恢复到初始状态。默认实现调用 `init()`。
    fn reset(&mut self) -> Result<(), Self::Error> {
        self.init()
    }
}

// ============================================================================
// RTC 计数器 Trait
// ============================================================================

/// RTC 秒计数器
///
/// 计数器每秒加一，数值含义由 [`crate::calendar::Calendar`] 解释。
pub trait RtcCounter: Device {
    /// 读取当前计数值
    fn read_counter(&self) -> Result<u32, Self::Error>;

    /// 写入计数值
    fn write_counter(&mut self, ticks: u32) -> Result<(), Self::Error>;

    /// 计数器是否在走时
    fn is_running(&self) -> bool;
}

// ============================================================================
// 设备错误类型
// ============================================================================

/// 通用设备错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// 设备未初始化
    NotInitialized,
    /// 设备忙
    Busy,
    /// 超时
    Timeout,
    /// 无效参数
    InvalidParameter,
    /// 其他错误
    Other,
}

// ============================================================================
// 单元测试
// ============================================================================
