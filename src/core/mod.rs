//! Core logger types and traits

pub mod appender;
pub mod argument;
pub mod config;
pub mod error;
pub mod factory;
pub mod identity;
pub mod line_renderer;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod message_formatter;
pub mod metrics;
pub mod stack_trace;
pub mod style;
pub mod throwable;
pub mod timestamp;

pub use appender::Appender;
pub use argument::ArgValue;
pub use config::{OutputTarget, RenderConfig, SimpleLoggerConfig};
pub use error::{LoggerError, Result};
pub use factory::{LoggerFactory, LoggerFactoryBuilder};
pub use identity::LoggerIdentity;
pub use line_renderer::LineRenderer;
pub use log_event::{LogEvent, Marker};
pub use log_level::{LevelFilter, LogLevel};
pub use logger::{Logger, LoggerBuilder, SharedAppender};
pub use message_formatter::{format_message, NormalizedParameters};
pub use metrics::LoggerMetrics;
pub use stack_trace::StackTraceRenderer;
pub use style::{ColorMode, LevelStyle, Style, Styler};
pub use throwable::{StackFrame, ThrowableInfo};
pub use timestamp::{shared_formatter, DateFormatter, SharedDateFormatter, TimestampFormat};
