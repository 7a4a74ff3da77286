//! Fan-out of one record to an ordered list of handlers

use crate::core::{Attr, Handler, LogHandler, LogLevel, Record, Result};
use std::sync::Arc;

/// Dispatches every record to each of its handlers, in order.
///
/// Each child filters on its own level. The first child error stops the
/// fan-out and is returned; children after it do not see the record.
///
/// # Example
///
/// ```
/// use rust_log_handlers::prelude::*;
///
/// let console = PrettyHandler::new(SharedBuffer::new(), None);
/// let verbose = PrettyHandler::new(
///     SharedBuffer::new(),
///     Some(PrettyOptions::new().with_level(LogLevel::Debug)),
/// );
///
/// let handler = ParallelHandler::new(vec![console.into(), verbose.into()]);
/// assert!(handler.enabled(LogLevel::Debug));
/// ```
#[derive(Debug, Clone)]
pub struct ParallelHandler {
    handlers: Arc<[Handler]>,
}

impl ParallelHandler {
    pub fn new(handlers: Vec<Handler>) -> Self {
        Self {
            handlers: handlers.into(),
        }
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl FromIterator<Handler> for ParallelHandler {
    fn from_iter<I: IntoIterator<Item = Handler>>(iter: I) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}

impl LogHandler for ParallelHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        self.handlers.iter().any(|h| h.enabled(level))
    }

    fn handle(&self, record: &Record) -> Result<()> {
        for handler in self.handlers.iter() {
            if !handler.enabled(record.level) {
                continue;
            }
            handler.handle(record)?;
        }
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Handler {
        Handler::Parallel(self.handlers.iter().map(|h| h.with_attrs(attrs)).collect())
    }

    fn with_group(&self, name: &str) -> Handler {
        Handler::Parallel(self.handlers.iter().map(|h| h.with_group(name)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HandlerError;
    use parking_lot::Mutex;

    type Journal = Arc<Mutex<Vec<String>>>;

    /// Writes "<name>:<prefix><message>" into a shared journal.
    struct Recorder {
        name: &'static str,
        min: LogLevel,
        fail: bool,
        prefix: String,
        journal: Journal,
    }

    impl Recorder {
        fn handler(name: &'static str, min: LogLevel, fail: bool, journal: &Journal) -> Handler {
            Handler::external(Recorder {
                name,
                min,
                fail,
                prefix: String::new(),
                journal: Arc::clone(journal),
            })
        }

        fn derived(&self, prefix: String) -> Handler {
            Handler::external(Recorder {
                name: self.name,
                min: self.min,
                fail: self.fail,
                prefix,
                journal: Arc::clone(&self.journal),
            })
        }
    }

    impl LogHandler for Recorder {
        fn enabled(&self, level: LogLevel) -> bool {
            level >= self.min
        }

        fn handle(&self, record: &Record) -> Result<()> {
            self.journal
                .lock()
                .push(format!("{}:{}{}", self.name, self.prefix, record.message));
            if self.fail {
                return Err(HandlerError::sink(self.name, "rejected"));
            }
            Ok(())
        }

        fn with_attrs(&self, attrs: &[Attr]) -> Handler {
            let mut prefix = self.prefix.clone();
            for attr in attrs {
                prefix.push_str(&format!("{}={} ", attr.key, attr.value));
            }
            self.derived(prefix)
        }

        fn with_group(&self, name: &str) -> Handler {
            self.derived(format!("{}{}.", self.prefix, name))
        }
    }

    fn journal() -> Journal {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn test_enabled_is_any_child() {
        let j = journal();
        let handler = ParallelHandler::new(vec![
            Recorder::handler("a", LogLevel::Error, false, &j),
            Recorder::handler("b", LogLevel::Warn, false, &j),
        ]);

        assert!(!handler.enabled(LogLevel::Info));
        assert!(handler.enabled(LogLevel::Warn));
        assert!(handler.enabled(LogLevel::Error));
    }

    #[test]
    fn test_empty_is_never_enabled() {
        let handler = ParallelHandler::new(Vec::new());
        assert!(handler.is_empty());
        assert!(!handler.enabled(LogLevel::Fatal));
        assert!(handler.handle(&Record::new(LogLevel::Fatal, "x")).is_ok());
    }

    #[test]
    fn test_fans_out_in_order() {
        let j = journal();
        let handler = ParallelHandler::new(vec![
            Recorder::handler("a", LogLevel::Info, false, &j),
            Recorder::handler("b", LogLevel::Info, false, &j),
            Recorder::handler("c", LogLevel::Info, false, &j),
        ]);

        handler.handle(&Record::new(LogLevel::Info, "m")).unwrap();
        assert_eq!(*j.lock(), vec!["a:m", "b:m", "c:m"]);
    }

    #[test]
    fn test_first_error_stops_fan_out() {
        let j = journal();
        let handler = ParallelHandler::new(vec![
            Recorder::handler("a", LogLevel::Info, true, &j),
            Recorder::handler("b", LogLevel::Info, false, &j),
        ]);

        let err = handler
            .handle(&Record::new(LogLevel::Info, "m"))
            .unwrap_err();
        assert!(matches!(err, HandlerError::Sink { ref sink, .. } if sink == "a"));
        assert_eq!(*j.lock(), vec!["a:m"]);
    }

    #[test]
    fn test_disabled_child_is_skipped() {
        let j = journal();
        let handler = ParallelHandler::new(vec![
            Recorder::handler("a", LogLevel::Error, true, &j),
            Recorder::handler("b", LogLevel::Info, false, &j),
        ]);

        handler.handle(&Record::new(LogLevel::Info, "m")).unwrap();
        assert_eq!(*j.lock(), vec!["b:m"]);
    }

    #[test]
    fn test_derivation_applies_to_every_child() {
        let j = journal();
        let handler = ParallelHandler::new(vec![
            Recorder::handler("a", LogLevel::Info, false, &j),
            Recorder::handler("b", LogLevel::Info, false, &j),
        ]);

        let child = handler.with_group("g").with_attrs(&[Attr::new("k", 1)]);
        match &child {
            Handler::Parallel(p) => assert_eq!(p.len(), 2),
            other => panic!("expected parallel handler, got {:?}", other),
        }

        child.handle(&Record::new(LogLevel::Info, "m")).unwrap();
        handler.handle(&Record::new(LogLevel::Info, "n")).unwrap();
        assert_eq!(*j.lock(), vec!["a:g.k=1 m", "b:g.k=1 m", "a:n", "b:n"]);
    }
}
