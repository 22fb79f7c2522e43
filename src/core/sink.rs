//! Sink trait for log output destinations

use std::io;

/// A destination that accepts the bytes of one formatted record at a time.
///
/// Sinks are shared between loggers and threads; an implementation that
/// cannot take concurrent writes must serialize them itself (see
/// [`WriterSink`](crate::sinks::WriterSink)). The logger never closes or
/// flushes a sink.
pub trait Sink: Send + Sync {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()>;

    fn name(&self) -> &str {
        "sink"
    }
}
