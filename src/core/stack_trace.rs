//! Stack trace rendering

use super::style::Styler;
use super::throwable::{StackFrame, ThrowableInfo};
use std::io::{self, Write};

const FRAME_INDENT: &str = "    ";

/// Writes an error, its frames and its causes, one line each
///
/// Output for an error with one cause:
///
/// ```text
/// java.lang.IllegalStateException: outer
///     at com.x.Y.run (Y.java:42)
/// Caused by: java.io.IOException: inner
///     at com.x.Z.read (Unknown Source)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StackTraceRenderer {
    styler: Styler,
}

impl StackTraceRenderer {
    pub fn new(styler: Styler) -> Self {
        Self { styler }
    }

    /// Render `error` and its cause chain to `sink`; `None` writes nothing
    ///
    /// The chain is walked iteratively until `cause` is exhausted, so it must
    /// be finite.
    pub fn render_error<W: Write + ?Sized>(
        &self,
        error: Option<&ThrowableInfo>,
        sink: &mut W,
    ) -> io::Result<()> {
        let Some(top) = error else {
            return Ok(());
        };

        write!(sink, "{}", self.styler.failure(&top.type_name))?;
        self.write_message(top, sink)?;
        writeln!(sink)?;

        let mut current = Some(top);
        while let Some(t) = current {
            for frame in &t.frames {
                self.write_frame(frame, sink)?;
            }

            current = t.cause.as_deref();
            if let Some(cause) = current {
                write!(
                    sink,
                    "{}: {}",
                    self.styler.strong("Caused by"),
                    cause.type_name
                )?;
                self.write_message(cause, sink)?;
                writeln!(sink)?;
            }
        }
        Ok(())
    }

    /// Render to a string, for callers that assemble output themselves
    pub fn render_to_string(&self, error: &ThrowableInfo) -> String {
        let mut buf = Vec::new();
        // writes into a Vec cannot fail
        let _ = self.render_error(Some(error), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn write_message<W: Write + ?Sized>(&self, t: &ThrowableInfo, sink: &mut W) -> io::Result<()> {
        if let Some(message) = &t.message {
            write!(sink, ": {}", self.styler.failure(message))?;
        }
        Ok(())
    }

    fn write_frame<W: Write + ?Sized>(&self, frame: &StackFrame, sink: &mut W) -> io::Result<()> {
        writeln!(
            sink,
            "{}{} {}.{} ({})",
            FRAME_INDENT,
            self.styler.strong("at"),
            frame.declaring_type,
            frame.method_name,
            self.styler.strong(&frame.location())
        )
    }
}
