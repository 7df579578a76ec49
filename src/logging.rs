/// Logging setup for panel hosts
use log::LevelFilter;

/// Initialize logging for the panel backend
pub fn init_logging(level: LogLevel) {
    let level_filter = match level {
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Error => LevelFilter::Error,
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level_filter)
        .try_init();
}

/// Log levels
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(LogLevel::Debug);
        init_logging(LogLevel::Info);
    }
}
