use std::io::{self, Write};

/// Synchronous destination for rendered report text.
///
/// Implementations transport already-formatted text to a concrete output
/// (stdout, stderr, an in-memory buffer, a file). The reporter performs a
/// series of small unbuffered writes per record; ordering within one
/// record is guaranteed by the caller issuing the writes sequentially.
pub trait Sink: Send + Sync {
    /// Write `text` verbatim to the underlying output.
    ///
    /// **Parameters**
    /// - `text`: one rendered segment; never retried on failure.
    ///
    /// **Returns**
    /// - `Ok(())` if the segment was accepted by the output.
    /// - `Err(..)` on I/O failure. The reporter propagates this to its
    ///   caller and abandons the rest of the current record.
    fn write_str(&self, text: &str) -> io::Result<()>;
}

/// Sink writing to the process standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_str(&self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()
    }
}

/// Sink writing to the process standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_str(&self, text: &str) -> io::Result<()> {
        let stderr = io::stderr();
        let mut lock = stderr.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()
    }
}
