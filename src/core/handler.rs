//! Handler capability shared by every composable sink

use super::{attr::Attr, error::Result, log_level::LogLevel, record::Record};
use crate::handlers::{AsyncHandler, ParallelHandler, PrettyHandler};
use std::fmt;
use std::sync::Arc;

/// Capability every log sink exposes.
///
/// `with_attrs` and `with_group` never mutate the receiver; they return a new
/// handler and the receiver stays usable on its own.
///
/// # Example
///
/// ```
/// use rust_log_handlers::core::{Attr, Handler, LogHandler, LogLevel, Record, Result};
///
/// struct Discard;
///
/// impl LogHandler for Discard {
///     fn enabled(&self, _level: LogLevel) -> bool {
///         true
///     }
///
///     fn handle(&self, _record: &Record) -> Result<()> {
///         Ok(())
///     }
///
///     fn with_attrs(&self, _attrs: &[Attr]) -> Handler {
///         Handler::external(Discard)
///     }
///
///     fn with_group(&self, _name: &str) -> Handler {
///         Handler::external(Discard)
///     }
/// }
/// ```
pub trait LogHandler: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;
    fn handle(&self, record: &Record) -> Result<()>;
    fn with_attrs(&self, attrs: &[Attr]) -> Handler;
    fn with_group(&self, name: &str) -> Handler;
}

/// A composed handler, selected at composition time.
#[derive(Clone)]
pub enum Handler {
    Async(AsyncHandler),
    Parallel(ParallelHandler),
    Pretty(PrettyHandler),
    External(Arc<dyn LogHandler>),
}

impl Handler {
    /// Wrap any external implementation of the capability
    pub fn external<H: LogHandler + 'static>(handler: H) -> Self {
        Handler::External(Arc::new(handler))
    }

    fn as_dyn(&self) -> &dyn LogHandler {
        match self {
            Handler::Async(h) => h,
            Handler::Parallel(h) => h,
            Handler::Pretty(h) => h,
            Handler::External(h) => h.as_ref(),
        }
    }
}

impl LogHandler for Handler {
    fn enabled(&self, level: LogLevel) -> bool {
        self.as_dyn().enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        self.as_dyn().handle(record)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Handler {
        self.as_dyn().with_attrs(attrs)
    }

    fn with_group(&self, name: &str) -> Handler {
        self.as_dyn().with_group(name)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Async(h) => f.debug_tuple("Async").field(h).finish(),
            Handler::Parallel(h) => f.debug_tuple("Parallel").field(h).finish(),
            Handler::Pretty(h) => f.debug_tuple("Pretty").field(h).finish(),
            Handler::External(_) => f.write_str("External(..)"),
        }
    }
}

impl From<AsyncHandler> for Handler {
    fn from(h: AsyncHandler) -> Self {
        Handler::Async(h)
    }
}

impl From<ParallelHandler> for Handler {
    fn from(h: ParallelHandler) -> Self {
        Handler::Parallel(h)
    }
}

impl From<PrettyHandler> for Handler {
    fn from(h: PrettyHandler) -> Self {
        Handler::Pretty(h)
    }
}
