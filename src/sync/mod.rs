pub mod shared;

// 重新导出常用类型
pub use shared::SharedCalendar;
