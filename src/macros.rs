//! Logging macros that capture the call site.
//!
//! Each macro formats its message like `format!`, records `file!()`,
//! `line!()` and `module_path!()` as the capture site, and passes the record
//! to a [`Logger`](crate::Logger). Attributes go in a leading `{ key = value }`
//! block.
//!
//! # Examples
//!
//! ```
//! use rust_log_handlers::prelude::*;
//! use rust_log_handlers::{info, warn};
//!
//! let logger = Logger::new(PrettyHandler::new(SharedBuffer::new(), None));
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! warn!(logger, { user = "alice", attempts = 3 }, "Login retry for {}", "alice");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_log_handlers::prelude::*;
/// # let logger = Logger::new(PrettyHandler::new(SharedBuffer::new(), None));
/// use rust_log_handlers::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, { code = 500 }, "Request failed: {}", "timeout");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, { $($key:ident = $value:expr),* $(,)? }, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log_record(
                $crate::Record::new(level, format!($($arg)+))
                    .with_location(file!(), line!(), module_path!())
                    $(.with_attr(stringify!($key), $value))*
            );
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!($logger, $level, {}, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_handlers::prelude::*;
/// # let logger = Logger::new(PrettyHandler::new(SharedBuffer::new(), None));
/// use rust_log_handlers::info;
/// info!(logger, "Application started");
/// info!(logger, { items = 100 }, "Processing batch");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Attr, Handler, LogHandler, LogLevel, Logger, Record, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture {
        records: Arc<Mutex<Vec<Record>>>,
    }

    impl LogHandler for Capture {
        fn enabled(&self, level: LogLevel) -> bool {
            level >= LogLevel::Debug
        }

        fn handle(&self, record: &Record) -> Result<()> {
            self.records.lock().push(record.clone());
            Ok(())
        }

        fn with_attrs(&self, _attrs: &[Attr]) -> Handler {
            Handler::external(self.clone())
        }

        fn with_group(&self, _name: &str) -> Handler {
            Handler::external(self.clone())
        }
    }

    fn capture() -> (Capture, Logger) {
        let capture = Capture::default();
        let logger = Logger::new(Handler::external(capture.clone()));
        (capture, logger)
    }

    #[test]
    fn test_log_macro_formats_and_locates() {
        let (capture, logger) = capture();
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let records = capture.records.lock();
        assert_eq!(records[0].message, "Formatted: 42");
        assert_eq!(records[0].frames()[0].file, file!());
        assert!(records[0].frames()[0].line > 0);
    }

    #[test]
    fn test_attrs_block() {
        let (capture, logger) = capture();
        warn!(logger, { user = "alice", attempts = 3, }, "Retry {} of {}", 1, 3);

        let records = capture.records.lock();
        let record = &records[0];
        assert_eq!(record.level, LogLevel::Warn);
        assert_eq!(record.message, "Retry 1 of 3");
        let keys: Vec<&str> = record.attrs().iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["user", "attempts"]);
    }

    #[test]
    fn test_level_macros() {
        let (capture, logger) = capture();
        trace!(logger, "Trace message");
        debug!(logger, "Debug message");
        info!(logger, "Info message");
        warn!(logger, "Warning message");
        error!(logger, "Error code: {}", 500);
        fatal!(logger, "Critical failure: {}", "system");

        let levels: Vec<LogLevel> = capture.records.lock().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error,
                LogLevel::Fatal
            ]
        );
    }
}
