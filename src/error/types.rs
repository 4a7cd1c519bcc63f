use crate::drivers::DeviceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcError {
    // 日历相关
    OutOfRange,
    InvalidDay,
    CacheStale,

    // 设备相关
    NotInitialized,
    DeviceFault,
}

impl core::fmt::Display for RtcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            // 日历
            RtcError::OutOfRange => write!(f, "Time field out of range"),
            RtcError::InvalidDay => write!(f, "Day exceeds the length of the month"),
            RtcError::CacheStale => write!(f, "Year-seconds cache was built for another year"),

            // 设备
            RtcError::NotInitialized => write!(f, "RTC device not initialized"),
            RtcError::DeviceFault => write!(f, "RTC device fault"),
        }
    }
}

impl From<DeviceError> for RtcError {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::NotInitialized => RtcError::NotInitialized,
            DeviceError::InvalidParameter => RtcError::OutOfRange,
            _ => RtcError::DeviceFault,
        }
    }
}

pub type Result<T> = core::result::Result<T, RtcError>;
