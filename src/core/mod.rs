//! Core types: records, attributes, levels and the handler capability

pub mod attr;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod task;

pub use attr::{Attr, Value};
pub use error::{HandlerError, Result};
pub use handler::{Handler, LogHandler};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::{DispatchMetrics, ErrorCallback};
pub use record::{Frame, Record};
pub use task::spawn_detached;
