mod log;

pub use self::log::{LogConfig, LogFormat, ParseLogFormatError};
