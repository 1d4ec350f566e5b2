use crate::sink::Sink;
use std::io;
use std::sync::{Arc, Mutex};

/// A sink that accumulates everything written to it in memory.
///
/// Useful for asserting on the exact rendered output in unit tests, and
/// for measuring reporter overhead without terminal I/O. Clones share the
/// same buffer, so a test can hand one clone to the reporter and inspect
/// the other.
#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, concatenated in write order.
    pub fn contents(&self) -> String {
        self.buffer.lock().expect("memory sink poisoned").clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().expect("memory sink poisoned").clear();
    }
}

impl Sink for MemorySink {
    fn write_str(&self, text: &str) -> io::Result<()> {
        self.buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory sink poisoned"))?
            .push_str(text);
        Ok(())
    }
}
