//! # Styled Line Logger
//!
//! A simple line-oriented logger that renders each event as one
//! human-readable, optionally colorized line, followed by the stack trace and
//! cause chain of an attached error.
//!
//! ## Features
//!
//! - **Configurable line layout**: timestamp, thread, level, logger name and markers
//! - **Styled output**: colorized levels and stack traces when writing to a terminal
//! - **Positional messages**: `{}` placeholders filled from arguments
//! - **Thread Safe**: loggers are shared across threads; output blocks never interleave

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, WriterAppender};
    pub use crate::core::{
        Appender, ArgValue, ColorMode, LevelFilter, LineRenderer, LogEvent, LogLevel, Logger,
        LoggerBuilder, LoggerError, LoggerFactory, LoggerIdentity, LoggerMetrics, Marker,
        OutputTarget, RenderConfig, Result, SimpleLoggerConfig, StackFrame, StackTraceRenderer,
        Styler, ThrowableInfo, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, WriterAppender};
pub use core::{
    format_message, Appender, ArgValue, ColorMode, DateFormatter, LevelFilter, LevelStyle,
    LineRenderer, LogEvent, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerFactory,
    LoggerFactoryBuilder, LoggerIdentity, LoggerMetrics, Marker, NormalizedParameters,
    OutputTarget, RenderConfig, Result, SimpleLoggerConfig, StackFrame, StackTraceRenderer,
    shared_formatter, Style, Styler, ThrowableInfo, TimestampFormat,
};
