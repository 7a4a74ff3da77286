//! Handler implementations

pub mod async_handler;
pub mod buffer;
pub mod parallel;
pub mod pretty;

pub use async_handler::AsyncHandler;
pub use buffer::SharedBuffer;
pub use parallel::ParallelHandler;
pub use pretty::{PrettyHandler, PrettyOptions};

// Re-export the capability for convenience
pub use crate::core::{Handler, LogHandler};
