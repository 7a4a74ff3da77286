//! Fire-and-forget dispatch to an inner handler

use crate::core::{
    spawn_detached, Attr, DispatchMetrics, ErrorCallback, Handler, LogHandler, LogLevel, Record,
    Result,
};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Wraps one handler and runs its `handle` as a detached unit.
///
/// `handle` returns `Ok(())` as soon as the unit is scheduled. The inner
/// outcome never reaches the caller: there is no delivery guarantee, no
/// cancellation and no bound on pending units. Errors are dropped unless an
/// error callback is configured; counters are kept in [`DispatchMetrics`].
///
/// # Example
///
/// ```
/// use rust_log_handlers::prelude::*;
///
/// let pretty = PrettyHandler::new(SharedBuffer::new(), None);
/// let handler = AsyncHandler::new(pretty);
///
/// // Returns before anything is rendered.
/// handler.handle(&Record::new(LogLevel::Info, "started")).unwrap();
/// ```
#[derive(Clone)]
pub struct AsyncHandler {
    inner: Box<Handler>,
    metrics: Arc<DispatchMetrics>,
    on_error: Option<ErrorCallback>,
}

impl AsyncHandler {
    pub fn new(inner: impl Into<Handler>) -> Self {
        Self {
            inner: Box::new(inner.into()),
            metrics: Arc::new(DispatchMetrics::new()),
            on_error: None,
        }
    }

    /// Observe errors that would otherwise be discarded.
    ///
    /// The callback runs inside the detached unit and is shared with every
    /// handler derived from this one.
    #[must_use]
    pub fn with_error_callback(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    pub fn inner(&self) -> &Handler {
        &self.inner
    }

    /// Counters shared by this handler and everything derived from it
    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    fn derive(&self, inner: Handler) -> Self {
        Self {
            inner: Box::new(inner),
            metrics: Arc::clone(&self.metrics),
            on_error: self.on_error.clone(),
        }
    }
}

impl LogHandler for AsyncHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        self.inner.enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let inner = self.inner.clone();
        let metrics = Arc::clone(&self.metrics);
        let on_error = self.on_error.clone();
        let record = record.clone();

        metrics.record_dispatched();
        spawn_detached(move || {
            match catch_unwind(AssertUnwindSafe(|| inner.handle(&record))) {
                Ok(Ok(())) => {
                    metrics.record_completed();
                }
                Ok(Err(e)) => {
                    metrics.record_failed();
                    if let Some(callback) = on_error {
                        callback(&e);
                    }
                }
                Err(_) => {
                    metrics.record_panicked();
                }
            }
        });

        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Handler {
        Handler::Async(self.derive(self.inner.with_attrs(attrs)))
    }

    fn with_group(&self, name: &str) -> Handler {
        Handler::Async(self.derive(self.inner.with_group(name)))
    }
}

impl fmt::Debug for AsyncHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncHandler")
            .field("inner", &self.inner)
            .field("metrics", &self.metrics)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
