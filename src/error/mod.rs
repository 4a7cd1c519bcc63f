mod types;

pub use types::{Result, RtcError};
