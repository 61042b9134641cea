//! Logging helpers for applications embedding `sheet-bars`.
//!
//! Library internals emit `tracing` events. The pipeline additionally reports
//! its outcome through an injected [`PipelineLogger`], so hosts decide where
//! user-facing messages go without touching global state.

use std::cell::RefCell;

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Logging capability handed to the pipeline.
pub trait PipelineLogger {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

impl<L: PipelineLogger + ?Sized> PipelineLogger for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Forwards pipeline messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl PipelineLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "sheet_bars::pipeline", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "sheet_bars::pipeline", "{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps pipeline messages in memory, e.g. for a UI status panel or tests.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: RefCell<Vec<LogEntry>>,
}

impl RecordingLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages(LogLevel::Error)
    }

    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.messages(LogLevel::Info)
    }

    fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    fn record(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            message: message.to_owned(),
        });
    }
}

impl PipelineLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}
