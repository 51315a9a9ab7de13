//! Logging macros for positional message formatting.
//!
//! These macros take a message pattern with `{}` placeholders followed by the
//! values to substitute, converting each value with `ArgValue::from`.
//!
//! # Examples
//!
//! ```
//! use styled_line_logger::prelude::*;
//! use styled_line_logger::info;
//!
//! let logger = Logger::builder("com.example.Server")
//!     .appender(WriterAppender::new(Vec::new()))
//!     .build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With positional arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // A trailing ThrowableInfo becomes the event's stack trace
//! let err = ThrowableInfo::new("java.net.BindException").with_message("in use");
//! info!(logger, "Retrying bind on {}", port, err);
//! ```

/// Log a message pattern with positional arguments at the given level.
///
/// # Examples
///
/// ```
/// # use styled_line_logger::prelude::*;
/// # let logger = Logger::builder("app").appender(WriterAppender::new(Vec::new())).build();
/// use styled_line_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $pattern:expr $(,)?) => {
        $logger.log($level, $pattern, &[])
    };
    ($logger:expr, $level:expr, $pattern:expr, $($arg:expr),+ $(,)?) => {
        $logger.log($level, $pattern, &[$($crate::ArgValue::from($arg)),+])
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use styled_line_logger::prelude::*;
/// # let logger = Logger::builder("app").appender(WriterAppender::new(Vec::new())).build();
/// # logger.set_level(LevelFilter::Trace);
/// use styled_line_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use styled_line_logger::prelude::*;
/// # let logger = Logger::builder("app").appender(WriterAppender::new(Vec::new())).build();
/// use styled_line_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use styled_line_logger::prelude::*;
/// # let logger = Logger::builder("app").appender(WriterAppender::new(Vec::new())).build();
/// use styled_line_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::WriterAppender;
    use crate::core::{LevelFilter, LogLevel, Logger, RenderConfig, ThrowableInfo};
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::builder("macros")
            .level(LevelFilter::Trace)
            .render_config(RenderConfig::bare())
            .appender(WriterAppender::new(buf.clone()))
            .build();
        (logger, buf)
    }

    fn output(buf: &SharedBuf) -> String {
        String::from_utf8(buf.0.lock().clone()).expect("utf8 output")
    }

    #[test]
    fn test_log_macro() {
        let (logger, buf) = capture();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert_eq!(output(&buf), "INFO Test message\nINFO Formatted: 42\n");
    }

    #[test]
    fn test_level_macros() {
        let (logger, buf) = capture();
        trace!(logger, "Value: {}", 10);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        assert_eq!(
            output(&buf),
            "TRACE Value: 10\nDEBUG Count: 5\nINFO Items: 100\nWARNING Retry 1 of 3\nERROR Code: 500\n"
        );
    }

    #[test]
    fn test_macro_with_trailing_throwable() {
        let (logger, buf) = capture();
        let name = String::from("job1");
        error!(logger, "failed for {}", &name, ThrowableInfo::new("Boom"));
        assert_eq!(output(&buf), "ERROR failed for job1\nBoom\n");
    }
}
