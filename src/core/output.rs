//! Output bindings: one sink paired with one formatter

use super::formatter::{Formatter, LineFormatter};
use super::record::Record;
use super::sink::Sink;
use crate::sinks::StdoutSink;
use std::fmt;
use std::sync::Arc;

/// Immutable (sink, formatter) pair.
///
/// Cloning is cheap; both halves are reference counted so the same sink can be
/// bound to several loggers or formatters.
#[derive(Clone)]
pub struct Output {
    sink: Arc<dyn Sink>,
    formatter: Arc<dyn Formatter>,
}

/// Where a single output failed while handling a record
#[derive(Debug)]
pub enum OutputFailure {
    Format(std::io::Error),
    Write(std::io::Error),
}

impl Output {
    pub fn new<S, F>(sink: S, formatter: F) -> Self
    where
        S: Sink + 'static,
        F: Formatter + 'static,
    {
        Self {
            sink: Arc::new(sink),
            formatter: Arc::new(formatter),
        }
    }

    /// Bind already-shared halves
    pub fn from_shared(sink: Arc<dyn Sink>, formatter: Arc<dyn Formatter>) -> Self {
        Self { sink, formatter }
    }

    /// Standard output with the given formatter
    pub fn stdout<F: Formatter + 'static>(formatter: F) -> Self {
        Self::new(StdoutSink, formatter)
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    /// Format `record` into a buffer and hand it to the sink in one write.
    pub fn emit(&self, record: &Record<'_>) -> Result<(), OutputFailure> {
        let mut buf = Vec::with_capacity(128);
        self.formatter
            .format(&mut buf, record)
            .map_err(OutputFailure::Format)?;
        self.sink.write_all(&buf).map_err(OutputFailure::Write)
    }
}

impl Default for Output {
    /// Human-readable lines on standard output
    fn default() -> Self {
        Self::stdout(LineFormatter::new())
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("sink", &self.sink.name())
            .field("formatter", &self.formatter.name())
            .finish()
    }
}
