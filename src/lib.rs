//! # apt-rtc
//!
//! APT 系列 MCU 硬件 RTC 的日历/时间换算引擎。
//!
//! 硬件 RTC 只维护一个秒计数器，本 crate 负责在计数器与日历时间
//! (年、月、日、时、分、秒、星期) 之间互相换算，并提供基于该引擎的
//! RTC 驱动封装。
//!
//! ## 模块结构
//!
//! - [`config`]: 年份窗口、参考年等编译期常量
//! - [`error`]: 错误类型
//! - [`log`]: 分级日志宏
//! - [`calendar`]: 日历算法与年秒缓存
//! - [`sync`]: 中断与主循环共享的日历上下文
//! - [`drivers`]: RTC 计数器设备抽象与驱动
//!
//! ## 使用示例
//!
//! ```rust
//! use apt_rtc::calendar::{BrokenDownTime, Calendar};
//!
//! let t = BrokenDownTime::new(24, 2, 29, 12, 30, 0);
//! let (calendar, ticks) = Calendar::anchored(&t).unwrap();
//! assert_eq!(calendar.from_elapsed_seconds(ticks).unwrap(), t);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod log;
pub mod calendar;
pub mod sync;
pub mod drivers;

pub use calendar::{BrokenDownTime, Calendar, ElapsedSeconds, Weekday};
pub use error::{Result, RtcError};
