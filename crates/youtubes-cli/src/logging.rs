//! Structured logging for the command-line front end.
//!
//! Console output goes to stderr so command output on stdout stays clean.
//! When a log directory is configured, events are also written as JSON to a
//! rotating log file.

use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

const CRATE_TARGETS: &[&str] = &["youtubes", "youtubes_core"];

/// Logging configuration options.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory for JSON log files. No file output when `None`.
    pub log_directory: Option<PathBuf>,
    /// Log file name prefix (e.g., "youtubes" -> "youtubes.2024-01-15.log").
    pub log_file_prefix: String,
    /// Maximum log level for console output of this project's crates.
    pub console_level: Level,
    /// Maximum log level for file output.
    pub file_level: Level,
    /// How often to rotate log files.
    pub rotation: LogRotation,
    /// Number of rotated log files to keep.
    pub max_log_files: usize,
    /// Whether to include ANSI color codes in console output.
    pub console_ansi: bool,
}

/// Log rotation frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogRotation {
    /// Create a new log file every hour.
    Hourly,
    /// Create a new log file every day.
    Daily,
    /// Never rotate (single log file).
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_directory: None,
            log_file_prefix: "youtubes".to_string(),
            console_level: Level::WARN,
            file_level: Level::DEBUG,
            rotation: LogRotation::Daily,
            max_log_files: 7,
            console_ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Configuration for `--verbose` runs.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            console_level: Level::DEBUG,
            ..Self::default()
        }
    }

    /// Also write JSON logs into `path`.
    #[must_use]
    pub fn with_log_directory(mut self, path: PathBuf) -> Self {
        self.log_directory = Some(path);
        self
    }

    /// Set the log rotation frequency.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: LogRotation) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Guard that keeps file logging active. Drop this to flush and close log files.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Returns a guard that must be kept alive for the duration of the program.
/// When the guard is dropped, pending log entries are flushed to disk.
///
/// `RUST_LOG` overrides the console filter.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let console_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => crate_filter(Level::WARN, config.console_level)?,
    };
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.console_ansi)
        .with_target(false)
        .with_filter(console_filter);

    let (json_layer, file_guard) = match &config.log_directory {
        Some(directory) => {
            let (layer, guard) = file_layer(config, directory)?;
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(json_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

fn file_layer(
    config: &LoggingConfig,
    directory: &Path,
) -> Result<(BoxedLayer, WorkerGuard), LoggingError> {
    if !directory.exists() {
        std::fs::create_dir_all(directory).map_err(|e| LoggingError::DirectoryCreationFailed {
            path: directory.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    let appender = RollingFileAppender::builder()
        .rotation(config.rotation.into())
        .filename_prefix(&config.log_file_prefix)
        .filename_suffix("log")
        .max_log_files(config.max_log_files)
        .build(directory)
        .map_err(|e| LoggingError::AppenderFailed(e.to_string()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .with_filter(crate_filter(Level::INFO, config.file_level)?)
        .boxed();

    Ok((layer, guard))
}

/// Filter at `default` for dependencies and `ours` for this project's crates.
fn crate_filter(default: Level, ours: Level) -> Result<EnvFilter, LoggingError> {
    let mut filter = EnvFilter::new(level_to_directive(default));
    for target in CRATE_TARGETS {
        let directive = format!("{target}={}", level_to_directive(ours));
        let directive: Directive = directive
            .parse()
            .map_err(|e| LoggingError::InvalidDirective(format!("{directive}: {e}")))?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

/// Get the default log directory.
#[must_use]
pub fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("youtubes")
        .join("logs")
}

/// Convert a tracing Level to a filter directive string.
const fn level_to_directive(level: Level) -> &'static str {
    match level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory {path}: {reason}")]
    DirectoryCreationFailed {
        /// The path that could not be created.
        path: PathBuf,
        /// The reason for the failure.
        reason: String,
    },

    /// The rolling file appender could not be built.
    #[error("Failed to open log file: {0}")]
    AppenderFailed(String),

    /// A filter directive did not parse.
    #[error("Invalid log filter directive {0}")]
    InvalidDirective(String),

    /// A global subscriber is already installed.
    #[error("Logging is already initialized: {0}")]
    AlreadyInitialized(String),
}
