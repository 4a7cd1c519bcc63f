//! # 日历/时间换算引擎
//!
//! 在分解的日历时间 ([`BrokenDownTime`]) 与 RTC 秒计数之间换算。
//!
//! ## 模块结构
//!
//! - [`tables`]: 闰年判断、月份天数表
//! - [`validate`]: 字段合法性检查
//! - [`days`]: 日期与日序号互换
//! - [`weekday`]: 星期计算
//! - [`convert`]: 秒计数换算与年秒缓存 ([`Calendar`])

pub mod tables;
pub mod validate;
pub mod days;
pub mod weekday;
mod time;
pub mod convert;

pub use convert::{absolute_seconds, Calendar, ElapsedSeconds};
pub use tables::{days_before_month, days_in_month, is_leap};
pub use time::BrokenDownTime;
pub use validate::validate;
pub use weekday::{weekday_number, Weekday};
