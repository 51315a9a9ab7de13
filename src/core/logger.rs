//! Main logger implementation

use super::{
    appender::Appender,
    argument::ArgValue,
    config::RenderConfig,
    error::Result,
    identity::LoggerIdentity,
    line_renderer::LineRenderer,
    log_event::{LogEvent, Marker},
    log_level::{LevelFilter, LogLevel},
    metrics::LoggerMetrics,
    style::Styler,
    throwable::ThrowableInfo,
};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Appender shared by every logger of a factory
pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

/// Failures are reported on the first occurrence and then every this many
const FAILURE_REPORT_INTERVAL: u64 = 1000;

/// Named logger rendering events through a shared [`LineRenderer`]
///
/// Each event is rendered into one block (line, terminator, stack trace) that
/// is handed to the appender under its lock, so blocks from concurrent callers
/// never interleave.
pub struct Logger {
    identity: LoggerIdentity,
    level: RwLock<LevelFilter>,
    renderer: Arc<LineRenderer>,
    appender: SharedAppender,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    pub fn new(
        identity: LoggerIdentity,
        level: LevelFilter,
        renderer: Arc<LineRenderer>,
        appender: SharedAppender,
        metrics: Arc<LoggerMetrics>,
    ) -> Self {
        Self {
            identity,
            level: RwLock::new(level),
            renderer,
            appender,
            metrics,
        }
    }

    /// Create a builder for a standalone Logger
    ///
    /// # Example
    /// ```
    /// use styled_line_logger::prelude::*;
    ///
    /// let logger = Logger::builder("com.example.Runner")
    ///     .level(LevelFilter::Debug)
    ///     .build();
    /// assert!(logger.is_enabled(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        self.identity.full_name()
    }

    pub fn identity(&self) -> &LoggerIdentity {
        &self.identity
    }

    pub fn level(&self) -> LevelFilter {
        *self.level.read()
    }

    pub fn set_level(&self, level: LevelFilter) {
        *self.level.write() = level;
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.level.read().allows(level)
    }

    /// Log a message pattern with positional arguments
    pub fn log(&self, level: LogLevel, pattern: &str, args: &[ArgValue]) {
        if !self.check_enabled(level) {
            return;
        }
        self.emit(LogEvent::new(level, pattern).with_args(args.iter().cloned()));
    }

    /// Log with a single marker attached
    pub fn log_with_marker(&self, level: LogLevel, marker: &Marker, pattern: &str, args: &[ArgValue]) {
        if !self.check_enabled(level) {
            return;
        }
        let event = LogEvent::new(level, pattern)
            .with_marker(marker.clone())
            .with_args(args.iter().cloned());
        self.emit(event);
    }

    /// Log with an explicit throwable whose stack trace follows the line
    pub fn log_with_throwable(
        &self,
        level: LogLevel,
        pattern: &str,
        args: &[ArgValue],
        throwable: ThrowableInfo,
    ) {
        if !self.check_enabled(level) {
            return;
        }
        let event = LogEvent::new(level, pattern)
            .with_args(args.iter().cloned())
            .with_throwable(throwable);
        self.emit(event);
    }

    /// Log a fully built event
    pub fn log_event(&self, event: LogEvent) {
        if !self.check_enabled(event.level) {
            return;
        }
        self.emit(event);
    }

    #[inline]
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, &[]);
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, &[]);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, &[]);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, &[]);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, &[]);
    }

    /// Render a line without writing it, using this logger's identity
    pub fn render_line(&self, event: &LogEvent) -> String {
        self.renderer.render_line(event, &self.identity)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    fn check_enabled(&self, level: LogLevel) -> bool {
        let enabled = self.is_enabled(level);
        if !enabled {
            self.metrics.record_filtered();
        }
        enabled
    }

    fn emit(&self, event: LogEvent) {
        let event = event.normalized();

        let mut block = Vec::with_capacity(64 + event.message_pattern.len());
        // writes into a Vec cannot fail
        let _ = self.renderer.render_event(&event, &self.identity, &mut block);

        let mut appender = self.appender.lock();
        match appender.append(&block) {
            Ok(()) => {
                self.metrics.record_written();
                if event.throwable.is_some() {
                    self.metrics.record_throwable();
                }
            }
            Err(e) => {
                let previous = self.metrics.record_write_failure();
                if previous % FAILURE_REPORT_INTERVAL == 0 {
                    eprintln!(
                        "[LOGGER ERROR] Appender '{}' failed ({} failures so far): {}",
                        appender.name(),
                        previous + 1,
                        e
                    );
                }
            }
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.level())
            .finish()
    }
}

/// Builder for a standalone Logger with its own renderer and appender
///
/// Defaults: level `Info`, [`RenderConfig::default`], plain styling and a
/// console appender on stderr.
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    render_config: RenderConfig,
    styler: Styler,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LevelFilter::Info,
            render_config: RenderConfig::default(),
            styler: Styler::plain(),
            appender: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn render_config(mut self, config: RenderConfig) -> Self {
        self.render_config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn styler(mut self, styler: Styler) -> Self {
        self.styler = styler;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    pub fn build(self) -> Logger {
        let appender: Box<dyn Appender> = match self.appender {
            Some(appender) => appender,
            None => Box::new(crate::appenders::ConsoleAppender::new()),
        };
        Logger::new(
            LoggerIdentity::new(self.name),
            self.level,
            Arc::new(LineRenderer::new(self.render_config, self.styler)),
            Arc::new(Mutex::new(appender)),
            Arc::new(LoggerMetrics::new()),
        )
    }
}
