//! Hierarchical named loggers.
//!
//! A [`Logger`] is an explicit value handed to every component at
//! construction time. Children keep a reference to their parent so that every
//! message is prefixed with the full name chain:
//!
//! ```text
//! [youtubes/PlaylistManager/Pagination::new] [DEBUG] resultsPerPage or totalResults is not provided
//! ```
//!
//! That is the [`Logger::format`] text form. Events are emitted through
//! `tracing` with the message and a `logger` field holding the name path, so
//! whichever subscriber the application installs decides where they end up
//! and how the path is rendered. Messages more verbose than the logger's own
//! [`LogLevel`] are dropped before reaching `tracing`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Default name of the root logger.
pub const DEFAULT_ROOT_NAME: &str = "youtubes";

/// Verbosity threshold of a logger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors.
    #[default]
    Error,
    /// Errors and informational messages.
    Info,
    /// Everything, including raw payload dumps.
    Debug,
}

impl LogLevel {
    /// Upper-case label used in formatted messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(format!(
                "Unknown log level \"{other}\". Expected \"error\", \"info\", or \"debug\"."
            )),
        }
    }
}

#[derive(Debug)]
struct Node {
    name: String,
    level: LogLevel,
    parent: Option<Logger>,
}

/// A named logger that may have a parent.
///
/// Cloning is cheap; clones share the same node.
#[derive(Debug, Clone)]
pub struct Logger {
    node: Arc<Node>,
}

impl Logger {
    /// Create a root logger.
    pub fn new(name: impl Into<String>, level: LogLevel) -> Self {
        Self {
            node: Arc::new(Node {
                name: name.into(),
                level,
                parent: None,
            }),
        }
    }

    /// Create a child logger that inherits this logger's level.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        Self {
            node: Arc::new(Node {
                name: name.into(),
                level: self.node.level,
                parent: Some(self.clone()),
            }),
        }
    }

    /// This logger's own name (without its parents).
    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// This logger's verbosity threshold.
    pub fn level(&self) -> LogLevel {
        self.node.level
    }

    /// Names from the root down to this logger, joined with `/`.
    pub fn path(&self) -> String {
        let mut names = vec![self.name()];
        let mut current = self.node.parent.as_ref();
        while let Some(parent) = current {
            names.push(parent.name());
            current = parent.node.parent.as_ref();
        }
        names.reverse();
        names.join("/")
    }

    /// Whether a message at `level` would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.node.level
    }

    /// Format a message the way it is emitted.
    pub fn format(&self, level: LogLevel, message: &str) -> String {
        format!("[{}] [{}] {message}", self.path(), level.label())
    }

    /// Log an error message.
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message.as_ref());
    }

    /// Log an informational message.
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message.as_ref());
    }

    /// Log a debug message.
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message.as_ref());
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let path = self.path();
        match level {
            LogLevel::Error => tracing::error!(logger = %path, "{message}"),
            LogLevel::Info => tracing::info!(logger = %path, "{message}"),
            LogLevel::Debug => tracing::debug!(logger = %path, "{message}"),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_NAME, LogLevel::default())
    }
}

/// Log capture for tests.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a plain-text subscriber that records every level and
    /// return what it wrote. Lines start with the event's level.
    pub fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    /// Lines of `output` that open an event, i.e. start with a level.
    pub fn event_lines(output: &str) -> Vec<&str> {
        output
            .lines()
            .map(str::trim_start)
            .filter(|line| {
                ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"]
                    .iter()
                    .any(|level| line.starts_with(level))
            })
            .collect()
    }
}
