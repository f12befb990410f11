use crate::Result;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable used to override the filter directives.
const RUST_LOG: &str = "RUST_LOG";

/// Configures the global tracing subscriber.
///
/// Events are written to standard error without timestamps;
/// when a log directory is set events are also written as JSON
/// to a daily rolling file in that directory.
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    log_dir: Option<PathBuf>,
    verbose: bool,
}

impl Logger {
    /// Create a logger for an application name.
    ///
    /// The name is used as the default filter target and
    /// as the log file prefix.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log_dir: None,
            verbose: false,
        }
    }

    /// Write log files to a directory.
    pub fn log_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.log_dir = dir;
        self
    }

    /// Enable debug level output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Directory for log files.
    pub fn log_file_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    /// File name prefix for log files.
    pub fn file_name(&self) -> String {
        format!("{}.log", self.name)
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> String {
        let level = if self.verbose { "debug" } else { "info" };
        format!("{}={}", self.name, level)
    }

    /// Install the global subscriber.
    ///
    /// The returned guard flushes the log file when dropped
    /// so it must be held for the life of the program.
    pub fn init_subscriber(&self) -> Result<Option<WorkerGuard>> {
        let directive = std::env::var(RUST_LOG)
            .unwrap_or_else(|_| self.default_directive());
        let filter = EnvFilter::try_new(directive)?;
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .without_time();

        if let Some(dir) = self.log_file_dir() {
            std::fs::create_dir_all(dir)?;
            let appender =
                tracing_appender::rolling::daily(dir, self.file_name());
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer().json().with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file)
                .try_init()?;
            Ok(Some(guard))
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init()?;
            Ok(None)
        }
    }
}
