//! Standard output and standard error sinks

use crate::core::Sink;
use std::io::{self, Write};

/// Writes records to the process's standard output.
///
/// Each record is written under the stdout lock, so lines from different
/// threads do not interleave.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(bytes)
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Writes records to the process's standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(bytes)
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
