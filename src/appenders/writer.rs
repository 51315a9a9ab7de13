//! Appender over an arbitrary `Write` implementation

use crate::core::{Appender, LoggerError, Result};
use std::io::Write;

/// Writes blocks to any `Write + Send` destination
///
/// # Example
///
/// ```
/// use styled_line_logger::appenders::WriterAppender;
/// use styled_line_logger::Appender;
///
/// let mut appender = WriterAppender::new(Vec::new());
/// appender.append(b"INFO ready\n").unwrap();
/// assert_eq!(appender.get_ref(), b"INFO ready\n");
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self::named(writer, "writer")
    }

    pub fn named(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, block: &[u8]) -> Result<()> {
        self.writer
            .write_all(block)
            .map_err(|e| LoggerError::io_operation("writing log block", self.name.clone(), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
