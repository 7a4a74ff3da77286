//! Colored, multi-line rendering for humans
//!
//! Output looks like:
//!
//! ```text
//! \x1b[32m12:34:56 [INFO] request served\x1b[0m
//!     \x1b[30mhttp.status: 200\x1b[0m
//!     \x1b[30mhttp.path: "/health"\x1b[0m
//! ```
//!
//! It is meant to be read, not parsed.

use crate::core::{spawn_detached, Attr, Handler, LogHandler, LogLevel, Record, Result, Value};
use colored::Color;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::Arc;

const RESET: &str = "\x1b[0m";
const TIME_FORMAT: &str = "%H:%M:%S";
const ATTR_INDENT: &str = "    ";
const DIM: Color = Color::Black;

type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Construction options for [`PrettyHandler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrettyOptions {
    /// Records below this level are not enabled
    pub level: LogLevel,
    /// Render the capture-site frames after the header
    pub add_source: bool,
}

impl PrettyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }
}

impl Default for PrettyOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            add_source: false,
        }
    }
}

/// Renders records as colored text to a shared writer.
///
/// Every handler derived through `with_attrs`/`with_group` writes to the same
/// writer under the same lock, so one record's block is never interleaved
/// with another's. `handle` renders on a detached unit and returns at once;
/// write errors are dropped there.
#[derive(Clone)]
pub struct PrettyHandler {
    sink: SharedSink,
    options: PrettyOptions,
    fixed_attrs: Arc<BTreeMap<String, String>>,
    group_prefix: String,
}

impl PrettyHandler {
    /// `None` options means `PrettyOptions::default()`.
    pub fn new<W>(writer: W, options: Option<PrettyOptions>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
            options: options.unwrap_or_default(),
            fixed_attrs: Arc::new(BTreeMap::new()),
            group_prefix: String::new(),
        }
    }

    pub fn stdout(options: Option<PrettyOptions>) -> Self {
        Self::new(io::stdout(), options)
    }

    pub fn stderr(options: Option<PrettyOptions>) -> Self {
        Self::new(io::stderr(), options)
    }

    pub fn options(&self) -> &PrettyOptions {
        &self.options
    }

    /// Dot-terminated path of the groups opened so far, e.g. `"http.req."`
    pub fn group_prefix(&self) -> &str {
        &self.group_prefix
    }

    /// Fully-qualified keys of the inherited attributes
    pub fn fixed_keys(&self) -> impl Iterator<Item = &str> {
        self.fixed_attrs.keys().map(String::as_str)
    }

    /// Whether two handlers write through the same sink and lock
    pub fn shares_sink_with(&self, other: &PrettyHandler) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }

    /// The exact bytes `handle` writes for `record`.
    pub fn render(&self, record: &Record) -> Vec<u8> {
        let mut out = String::with_capacity(128);
        // Writing into a String cannot fail.
        let _ = self.render_into(&mut out, record);
        out.into_bytes()
    }

    fn render_into(&self, out: &mut String, record: &Record) -> fmt::Result {
        write!(
            out,
            "{}{} [{}] {}{}",
            level_color(record.level),
            record.timestamp.format(TIME_FORMAT),
            record.level,
            record.message,
            RESET
        )?;

        if self.options.add_source && !record.frames().is_empty() {
            for frame in record.frames() {
                writeln!(
                    out,
                    " {}at {}:{}{}",
                    fg(DIM),
                    frame.file,
                    frame.line,
                    RESET
                )?;
            }
        } else {
            out.push('\n');
        }

        let mut seen = HashSet::with_capacity(record.num_attrs());
        for attr in record.attrs() {
            let key = format!("{}{}", self.group_prefix, attr.key);
            out.push_str(&attr_line(&key, &attr.value));
            seen.insert(key);
        }

        for (key, line) in self.fixed_attrs.iter() {
            if !seen.contains(key) {
                out.push_str(line);
            }
        }

        Ok(())
    }

    fn write_record(&self, record: &Record) -> io::Result<()> {
        let mut sink = self.sink.lock();
        let block = self.render(record);
        sink.write_all(&block)?;
        sink.flush()
    }
}

impl LogHandler for PrettyHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.options.level
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let handler = self.clone();
        let record = record.clone();
        spawn_detached(move || {
            let _ = handler.write_record(&record);
        });
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Handler {
        let mut fixed = BTreeMap::clone(&self.fixed_attrs);
        for attr in attrs {
            let key = format!("{}{}", self.group_prefix, attr.key);
            let line = attr_line(&key, &attr.value);
            fixed.insert(key, line);
        }

        Handler::Pretty(PrettyHandler {
            sink: Arc::clone(&self.sink),
            options: self.options,
            fixed_attrs: Arc::new(fixed),
            group_prefix: self.group_prefix.clone(),
        })
    }

    fn with_group(&self, name: &str) -> Handler {
        Handler::Pretty(PrettyHandler {
            sink: Arc::clone(&self.sink),
            options: self.options,
            fixed_attrs: Arc::clone(&self.fixed_attrs),
            group_prefix: format!("{}{}.", self.group_prefix, name),
        })
    }
}

impl fmt::Debug for PrettyHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrettyHandler")
            .field("options", &self.options)
            .field("group_prefix", &self.group_prefix)
            .field("fixed_attrs", &self.fixed_attrs.len())
            .finish_non_exhaustive()
    }
}

fn fg(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

fn level_color(level: LogLevel) -> String {
    match level.color_code() {
        Some(color) => fg(color),
        None => RESET.to_string(),
    }
}

fn attr_line(key: &str, value: &Value) -> String {
    format!("{}{}{}: {}{}\n", ATTR_INDENT, fg(DIM), key, render_value(value), RESET)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Bytes(b) => format!("bytes({})", b.len()),
        other => other.to_string(),
    }
}
