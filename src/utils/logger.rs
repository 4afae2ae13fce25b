use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

/// 根据 `-v` 次数选择日志级别
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// 初始化日志系统，输出到 stderr，避免干扰标准输出
pub fn init_logger(verbosity: u8) -> Result<(), SetLoggerError> {
    SimpleLogger::new().with_level(level_for(verbosity)).init()
}
