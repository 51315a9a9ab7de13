//! Appender trait for log output destinations

use super::error::Result;

/// Destination for rendered output
///
/// `append` receives one complete block (the log line, its terminator and any
/// stack trace) and should write it in a single operation so blocks from
/// different threads do not interleave.
pub trait Appender: Send {
    fn append(&mut self, block: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
