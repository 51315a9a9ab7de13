//! Console appender implementation

use crate::core::{Appender, LoggerError, OutputTarget, Result};
use std::io::{self, IsTerminal, Write};

pub struct ConsoleAppender {
    target: OutputTarget,
}

impl ConsoleAppender {
    /// Console appender writing to stderr
    pub fn new() -> Self {
        Self::with_target(OutputTarget::Stderr)
    }

    pub fn stdout() -> Self {
        Self::with_target(OutputTarget::Stdout)
    }

    pub fn with_target(target: OutputTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> OutputTarget {
        self.target
    }

    /// Whether the target stream is attached to a terminal
    pub fn is_terminal(&self) -> bool {
        match self.target {
            OutputTarget::Stderr => io::stderr().is_terminal(),
            OutputTarget::Stdout => io::stdout().is_terminal(),
        }
    }

    fn write_block<W: Write>(mut stream: W, block: &[u8]) -> io::Result<()> {
        stream.write_all(block)?;
        stream.flush()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, block: &[u8]) -> Result<()> {
        // The stream lock is held for the whole block
        let result = match self.target {
            OutputTarget::Stderr => Self::write_block(io::stderr().lock(), block),
            OutputTarget::Stdout => Self::write_block(io::stdout().lock(), block),
        };
        result.map_err(|e| LoggerError::io_operation("writing log block", self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            OutputTarget::Stderr => io::stderr().flush()?,
            OutputTarget::Stdout => io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            OutputTarget::Stderr => "console:stderr",
            OutputTarget::Stdout => "console:stdout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(ConsoleAppender::new().target(), OutputTarget::Stderr);
        assert_eq!(ConsoleAppender::stdout().target(), OutputTarget::Stdout);
        assert_eq!(ConsoleAppender::stdout().name(), "console:stdout");
    }

    #[test]
    fn test_append_and_flush() {
        let mut appender = ConsoleAppender::new();
        appender.append(b"INFO console appender test\n").expect("append");
        appender.flush().expect("flush");
    }
}
