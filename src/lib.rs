//! # Rust Log Handlers
//!
//! Composable handlers for structured log records. Independently written
//! sinks are combined by wrapping, without any sink knowing about the others.
//!
//! ## Features
//!
//! - **AsyncHandler**: fire-and-forget dispatch, the caller never waits
//! - **ParallelHandler**: fan-out to several handlers with per-handler levels
//! - **PrettyHandler**: colored multi-line rendering with inherited attributes
//! - **Composable**: `with_attrs`/`with_group` derive new handlers through any nesting
//!
//! ## Example
//!
//! ```
//! use rust_log_handlers::prelude::*;
//!
//! let console = PrettyHandler::new(SharedBuffer::new(), None);
//! let audit = PrettyHandler::new(
//!     SharedBuffer::new(),
//!     Some(PrettyOptions::new().with_level(LogLevel::Warn).with_source(true)),
//! );
//!
//! let handler = AsyncHandler::new(ParallelHandler::new(vec![console.into(), audit.into()]));
//! let logger = Logger::new(handler).with_group("http").with(&[Attr::new("port", 8080)]);
//!
//! logger.info("listening");
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Attr, DispatchMetrics, ErrorCallback, Frame, Handler, HandlerError, LogHandler, LogLevel,
        Logger, Record, Result, Value,
    };
    pub use crate::handlers::{
        AsyncHandler, ParallelHandler, PrettyHandler, PrettyOptions, SharedBuffer,
    };
}

pub use crate::core::{
    spawn_detached, Attr, DispatchMetrics, ErrorCallback, Frame, Handler, HandlerError,
    LogHandler, LogLevel, Logger, Record, Result, Value,
};
pub use crate::handlers::{AsyncHandler, ParallelHandler, PrettyHandler, PrettyOptions, SharedBuffer};
