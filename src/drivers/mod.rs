//! # 设备驱动框架
//!
//! ## 模块结构
//!
//! - [`traits`]: 设备驱动 trait 定义
//! - [`rtc`]: 基于秒计数器的 RTC 驱动
//! - [`examples`]: Mock 驱动
//!
//! ## 使用示例
//!
//! ```rust
//! use apt_rtc::calendar::BrokenDownTime;
//! use apt_rtc::drivers::{examples::MockRtc, Rtc};
//!
//! let mut rtc = Rtc::new(MockRtc::new());
//! rtc.init(&BrokenDownTime::new(23, 12, 31, 23, 59, 59)).unwrap();
//! rtc.device_mut().mock_tick(1);
//!
//! let now = rtc.now().unwrap();
//! assert_eq!(now.to_string(), "2024-01-01 00:00:00");
//! ```

pub mod traits;
pub mod rtc;
pub mod examples;

// 重新导出常用类型
pub use traits::{Device, DeviceError, RtcCounter};
pub use rtc::Rtc;
