//! # 示例驱动实现
//!
//! 提供基于 drivers traits 的 Mock 驱动实现，用于：
//! - 演示如何实现 RTC 计数器驱动
//! - 单元测试和集成测试
//! - 在没有真实硬件时进行开发
//!
//! ## 可用驱动
//!
//! | 驱动 | 说明 |
//! |------|------|
//! | [`MockRtc`] | Mock RTC 秒计数器 |

mod mock_rtc;

pub use mock_rtc::MockRtc;
