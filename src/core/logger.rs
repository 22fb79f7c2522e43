//! Module logger implementation

use super::{
    defaults::{global_defaults, Defaults},
    error::LoggerError,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output::{Output, OutputFailure},
    record::Record,
    value::Attr,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// The logging surface shared by every logger implementation.
///
/// Only the five required methods carry behaviour; the per-level helpers all
/// funnel into [`Log::print`]. A `Log` can be installed as the process-wide
/// default with [`set_default_logger`](crate::set_default_logger).
///
/// Emitting at [`LogLevel::Fatal`] is a plain write: nothing here halts the
/// process.
pub trait Log: Send + Sync {
    fn module(&self) -> &str;

    /// Effective threshold: the logger's own if set, else the current default
    fn level(&self) -> LogLevel;

    fn set_level(&self, level: LogLevel);

    /// Replace the output bindings. An empty list reverts to the defaults.
    fn set_outputs(&self, outputs: Vec<Output>);

    /// Emit `message` at `level` if the threshold allows it.
    fn print(&self, level: LogLevel, message: &str, attrs: &[Attr]);

    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        self.level().allows(level)
    }

    /// Render `args` into the message and emit it without attributes.
    /// Nothing is rendered when the threshold rejects `level`.
    fn printf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        match args.as_str() {
            Some(message) => self.print(level, message, &[]),
            None => self.print(level, &args.to_string(), &[]),
        }
    }

    fn fatal(&self, message: &str, attrs: &[Attr]) {
        self.print(LogLevel::Fatal, message, attrs);
    }

    /// Emit at `Error` with `err=<err>` ahead of the caller's attributes.
    fn error(&self, message: &str, err: &dyn fmt::Display, attrs: &[Attr]) {
        if !self.enabled(LogLevel::Error) {
            return;
        }
        let mut all = Vec::with_capacity(attrs.len() + 1);
        all.push(Attr::new("err", err.to_string()));
        all.extend_from_slice(attrs);
        self.print(LogLevel::Error, message, &all);
    }

    fn warning(&self, message: &str, attrs: &[Attr]) {
        self.print(LogLevel::Warning, message, attrs);
    }

    fn info(&self, message: &str, attrs: &[Attr]) {
        self.print(LogLevel::Info, message, attrs);
    }

    fn debug(&self, message: &str, attrs: &[Attr]) {
        self.print(LogLevel::Debug, message, attrs);
    }

    fn trace(&self, message: &str, attrs: &[Attr]) {
        self.print(LogLevel::Trace, message, attrs);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Fatal, args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Error, args);
    }

    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Warning, args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Info, args);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Debug, args);
    }

    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.printf(LogLevel::Trace, args);
    }
}

/// Named logger with its own optional threshold and outputs.
///
/// Anything left unset is resolved against a [`Defaults`] context on every
/// call, so later changes to the defaults are picked up live.
///
/// Configuration setters and emit calls may race; a setter is only guaranteed
/// to be observed by emit calls that start after it returns. Configure before
/// handing the logger to other threads.
pub struct Logger {
    module: String,
    level: RwLock<Option<LogLevel>>,
    outputs: RwLock<Option<Arc<[Output]>>>,
    defaults: Arc<Defaults>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger bound to the process-wide defaults
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self::with_defaults(module, global_defaults())
    }

    /// Logger bound to an explicitly supplied defaults context
    #[must_use]
    pub fn with_defaults(module: impl Into<String>, defaults: Arc<Defaults>) -> Self {
        Self {
            module: module.into(),
            level: RwLock::new(None),
            outputs: RwLock::new(None),
            defaults,
            metrics: LoggerMetrics::new(),
        }
    }

    #[must_use]
    pub fn builder(module: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(module)
    }

    /// Drop the logger's own threshold and follow the defaults again.
    pub fn clear_level(&self) {
        *self.level.write() = None;
    }

    /// The threshold set on this logger, ignoring the defaults
    pub fn own_level(&self) -> Option<LogLevel> {
        *self.level.read()
    }

    /// Resolved output bindings for the next emit call
    pub fn outputs(&self) -> Arc<[Output]> {
        match &*self.outputs.read() {
            Some(outputs) => Arc::clone(outputs),
            None => self.defaults.outputs(),
        }
    }

    pub fn has_own_outputs(&self) -> bool {
        self.outputs.read().is_some()
    }

    pub fn defaults(&self) -> &Arc<Defaults> {
        &self.defaults
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Hand `record` to every output in order.
    ///
    /// Each output is isolated: an error or panic in one is reported on
    /// stderr and counted, and the remaining outputs still run.
    fn dispatch(outputs: &[Output], record: &Record<'_>, metrics: &LoggerMetrics) {
        for (idx, output) in outputs.iter().enumerate() {
            let emit_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| output.emit(record)));

            match emit_result {
                Ok(Ok(())) => {}
                Ok(Err(failure)) => {
                    metrics.record_write_failure();
                    let err = match failure {
                        OutputFailure::Format(e) => {
                            LoggerError::formatter(output.formatter().name(), e.to_string())
                        }
                        OutputFailure::Write(e) => LoggerError::io_operation(
                            "writing record",
                            format!("sink '{}' rejected the write", output.sink().name()),
                            e,
                        ),
                    };
                    eprintln!("[LOGGER ERROR] Output #{} failed: {}", idx, err);
                }
                Err(panic_info) => {
                    metrics.record_write_failure();
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Output #{} panicked: {}. \
                         Other outputs continue to function.",
                        idx, panic_msg
                    );
                }
            }
        }
    }
}

impl Log for Logger {
    fn module(&self) -> &str {
        &self.module
    }

    fn level(&self) -> LogLevel {
        match *self.level.read() {
            Some(level) => level,
            None => self.defaults.level(),
        }
    }

    fn set_level(&self, level: LogLevel) {
        *self.level.write() = Some(level);
    }

    fn set_outputs(&self, outputs: Vec<Output>) {
        let mut slot = self.outputs.write();
        *slot = if outputs.is_empty() {
            None
        } else {
            Some(Arc::from(outputs))
        };
    }

    fn print(&self, level: LogLevel, message: &str, attrs: &[Attr]) {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }

        let outputs = self.outputs();
        let record = Record::now(level, &self.module, message, attrs);
        self.metrics.record_emitted();
        Self::dispatch(&outputs, &record, &self.metrics);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("module", &self.module)
            .field("level", &self.own_level())
            .field("outputs", &*self.outputs.read())
            .finish()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use module_logger::prelude::*;
/// use module_logger::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder("http")
///     .level(LogLevel::Debug)
///     .output(Output::new(sink.clone(), TagFormatter::new()))
///     .build();
///
/// logger.debug("request", &[Attr::new("path", "/health")]);
/// assert!(sink.contents().contains("path=\"/health\""));
/// ```
pub struct LoggerBuilder {
    module: String,
    level: Option<LogLevel>,
    outputs: Vec<Output>,
    defaults: Option<Arc<Defaults>>,
}

impl LoggerBuilder {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            level: None,
            outputs: Vec::new(),
            defaults: None,
        }
    }

    /// Set the logger's own threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Add an output binding
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Output) -> Self {
        self.outputs.push(output);
        self
    }

    /// Resolve unset configuration against `defaults` instead of the
    /// process-wide context
    #[must_use = "builder methods return a new value"]
    pub fn defaults(mut self, defaults: Arc<Defaults>) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn build(self) -> Logger {
        let defaults = self.defaults.unwrap_or_else(global_defaults);
        let logger = Logger::with_defaults(self.module, defaults);
        if let Some(level) = self.level {
            logger.set_level(level);
        }
        logger.set_outputs(self.outputs);
        logger
    }
}
