//! Front-end that builds records and hands them to a handler

use super::{
    attr::Attr,
    error::Result,
    handler::{Handler, LogHandler},
    log_level::LogLevel,
    record::Record,
};

/// Builds records and passes them to one composed handler.
///
/// Handler errors are swallowed by the level shorthands, the same way a
/// print statement does not fail the program. Use [`Logger::try_log_record`]
/// when the outcome matters.
///
/// # Example
///
/// ```
/// use rust_log_handlers::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(PrettyHandler::new(buffer.clone(), None))
///     .with(&[Attr::new("service", "billing")]);
///
/// logger.info("invoice created");
/// logger.debug("not enabled at the default level");
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    handler: Handler,
}

impl Logger {
    #[must_use]
    pub fn new(handler: impl Into<Handler>) -> Self {
        Self {
            handler: handler.into(),
        }
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.enabled(level)
    }

    /// A logger whose handler carries `attrs` on every record
    #[must_use]
    pub fn with(&self, attrs: &[Attr]) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        Self {
            handler: self.handler.with_attrs(attrs),
        }
    }

    /// A logger whose later attributes are qualified by `name`
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        Self {
            handler: self.handler.with_group(name),
        }
    }

    /// Hand `record` to the handler if its level is enabled.
    pub fn try_log_record(&self, record: Record) -> Result<()> {
        if !self.handler.enabled(record.level) {
            return Ok(());
        }
        self.handler.handle(&record)
    }

    pub fn log_record(&self, record: Record) {
        let _ = self.try_log_record(record);
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        self.log_record(Record::new(level, message));
    }

    pub fn log_attrs<I>(&self, level: LogLevel, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator<Item = Attr>,
    {
        if !self.enabled(level) {
            return;
        }
        self.log_record(Record::new(level, message).with_attrs(attrs));
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}
