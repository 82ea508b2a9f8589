//! Logging setup for the `rawtx` binary.
//!
//! Console output goes to stderr so that stdout carries only command output
//! (transaction summaries, hex, broadcast responses) and can be piped.
//! An optional log file receives the same events through a non-blocking
//! daily-rolling writer.
//!
//! # Example
//!
//! ```no_run
//! use rawtx::logging::{init_logging, LogConfig, LogFormat, LogLevel};
//!
//! let config = LogConfig {
//!     level: LogLevel::Debug,
//!     format: LogFormat::Compact,
//!     file_path: None,
//! };
//!
//! let _guard = init_logging(&config).expect("failed to initialize logging");
//! tracing::info!("logging ready");
//! ```

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable that overrides the level filter, e.g. `rawtx=trace`.
pub const LOG_ENV_VAR: &str = "RAWTX_LOG";

/// Errors raised while installing the subscriber.
#[derive(Debug)]
pub enum LogError {
    /// The log file path has no usable parent directory or file name.
    InvalidPath(String),
    /// Creating the log directory failed.
    FileCreation(std::io::Error),
    /// A subscriber was already installed, or the filter was rejected.
    SubscriberInit(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath(path) => write!(f, "invalid log file path: {path}"),
            Self::FileCreation(e) => write!(f, "failed to create log directory: {e}"),
            Self::SubscriberInit(msg) => write!(f, "failed to initialize logging: {msg}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileCreation(e) => Some(e),
            _ => None,
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Progress of each command step.
    Info,
    /// Signing hashes, endpoints, field values.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// The matching `tracing` level.
    #[must_use]
    pub const fn as_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Lowercase name, as accepted by [`EnvFilter`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented.
    Pretty,
    /// One JSON object per event.
    Json,
    /// One short line per event.
    #[default]
    Compact,
}

/// Logging configuration assembled from the global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum level to emit.
    pub level: LogLevel,
    /// Console and file layout.
    pub format: LogFormat,
    /// Optional log file; rotated daily.
    pub file_path: Option<PathBuf>,
}

/// Keeps the background file writer alive.
///
/// Dropping the guard flushes any buffered file output, so hold it until
/// `main` returns.
pub struct LogGuard {
    file_guard: Option<WorkerGuard>,
}

impl fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogGuard")
            .field("file_writer", &self.file_guard.is_some())
            .finish()
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global `tracing` subscriber.
///
/// [`LOG_ENV_VAR`] takes precedence over `config.level` when set.
///
/// # Errors
///
/// Returns [`LogError`] if the log directory cannot be created or a
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard, LogError> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.level.as_str()))
        .map_err(|e| LogError::SubscriberInit(e.to_string()))?;

    let mut layers: Vec<BoxedLayer> = vec![console_layer(config.format)];
    let mut guard = None;

    if let Some(path) = &config.file_path {
        let (writer, worker_guard) = file_writer(path)?;
        layers.push(file_layer(config.format, writer));
        guard = Some(worker_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LogError::SubscriberInit(e.to_string()))?;

    Ok(LogGuard { file_guard: guard })
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    let layer = tracing_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}

fn file_layer(format: LogFormat, writer: NonBlocking) -> BoxedLayer {
    let layer = tracing_fmt::layer().with_writer(writer).with_ansi(false);

    match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Pretty | LogFormat::Compact => layer.boxed(),
    }
}

fn file_writer(path: &std::path::Path) -> Result<(NonBlocking, WorkerGuard), LogError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LogError::InvalidPath(path.display().to_string()))?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));

    std::fs::create_dir_all(directory).map_err(LogError::FileCreation)?;

    let appender = tracing_appender::rolling::daily(directory, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

/// Map the `-v` count to a level: none is warn, then info, debug, trace.
#[must_use]
pub const fn verbosity_to_level(verbosity: u8) -> LogLevel {
    match verbosity {
        0 => LogLevel::Warn,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

/// Mask a secret for logging, keeping the first and last four characters.
///
/// Values shorter than 12 characters are fully masked.
#[must_use]
pub fn redact_sensitive(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 12 {
        return "***".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}***{tail}")
}
