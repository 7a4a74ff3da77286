//! Log record structure

use super::attr::{Attr, Value};
use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One resolved call frame of a record's capture site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub file: String,
    pub line: u32,
    pub module_path: Option<String>,
}

impl Frame {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            module_path: None,
        }
    }
}

/// Immutable snapshot of one log event.
///
/// Handlers only ever read a record; work that outlives a `handle` call
/// takes its own clone.
#[derive(Debug, Clone)]
pub struct Record {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
    attrs: Vec<Attr>,
    frames: Vec<Frame>,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            attrs: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.attrs.push(Attr::new(key, value));
        self
    }

    pub fn with_attrs<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = Attr>,
    {
        self.attrs.extend(attrs);
        self
    }

    pub fn with_location(self, file: &str, line: u32, module_path: &str) -> Self {
        self.with_frame(Frame {
            file: file.to_string(),
            line,
            module_path: Some(module_path.to_string()),
        })
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Explicit attributes in the order they were added
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }

    /// Capture-site frames, innermost first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}
