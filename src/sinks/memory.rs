//! In-memory capture sink

use crate::core::Sink;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Collects every record written to it.
///
/// Clones share the same buffer, so one handle can be bound to a logger while
/// another is used to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Captured>>,
}

#[derive(Debug, Default)]
struct Captured {
    bytes: Vec<u8>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().bytes).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.inner.lock().bytes.clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Number of `write_all` calls received
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.bytes.clear();
        inner.writes = 0;
    }
}

impl Sink for MemorySink {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut inner = self.inner.lock();
        inner.bytes.extend_from_slice(bytes);
        inner.writes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
