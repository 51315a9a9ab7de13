//! Logger factory
//!
//! Hands out one [`Logger`] per name, all sharing a renderer, an appender and
//! metrics built from a single [`SimpleLoggerConfig`].

use super::{
    appender::Appender,
    config::SimpleLoggerConfig,
    error::Result,
    identity::LoggerIdentity,
    line_renderer::LineRenderer,
    logger::{Logger, SharedAppender},
    metrics::LoggerMetrics,
    style::Styler,
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

pub struct LoggerFactory {
    config: SimpleLoggerConfig,
    renderer: Arc<LineRenderer>,
    appender: SharedAppender,
    metrics: Arc<LoggerMetrics>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerFactory {
    /// Factory writing to the console stream named by `config.output`
    pub fn new(config: SimpleLoggerConfig) -> Self {
        LoggerFactoryBuilder::new(config).build()
    }

    /// Create a builder for LoggerFactory
    ///
    /// # Example
    /// ```
    /// use styled_line_logger::prelude::*;
    ///
    /// let factory = LoggerFactory::builder(SimpleLoggerConfig::compact())
    ///     .appender(WriterAppender::new(Vec::new()))
    ///     .build();
    /// let logger = factory.get_logger("com.example.Runner");
    /// logger.info("started");
    /// assert_eq!(factory.metrics().events_written(), 1);
    /// ```
    #[must_use]
    pub fn builder(config: SimpleLoggerConfig) -> LoggerFactoryBuilder {
        LoggerFactoryBuilder::new(config)
    }

    /// Logger for `name`, created on first request and cached afterwards
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(Logger::new(
                LoggerIdentity::new(name),
                self.config.level_for(name),
                Arc::clone(&self.renderer),
                Arc::clone(&self.appender),
                Arc::clone(&self.metrics),
            ))
        });
        Arc::clone(logger)
    }

    /// Names of every logger created so far, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn config(&self) -> &SimpleLoggerConfig {
        &self.config
    }

    pub fn renderer(&self) -> &LineRenderer {
        &self.renderer
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }
}

/// Builder for constructing a LoggerFactory with a fluent API
pub struct LoggerFactoryBuilder {
    config: SimpleLoggerConfig,
    appender: Option<Box<dyn Appender>>,
    styler: Option<Styler>,
    start_time: Option<Instant>,
}

impl LoggerFactoryBuilder {
    pub fn new(config: SimpleLoggerConfig) -> Self {
        Self {
            config,
            appender: None,
            styler: None,
            start_time: None,
        }
    }

    /// Write to `appender` instead of the configured console stream
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Use `styler` regardless of the configured color mode
    #[must_use = "builder methods return a new value"]
    pub fn styler(mut self, styler: Styler) -> Self {
        self.styler = Some(styler);
        self
    }

    /// Instant elapsed-time timestamps are measured from
    #[must_use = "builder methods return a new value"]
    pub fn start_time(mut self, start_time: Instant) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn build(self) -> LoggerFactory {
        let mut is_terminal = false;
        let appender: Box<dyn Appender> = match self.appender {
            Some(appender) => appender,
            None => {
                let console = ConsoleAppender::with_target(self.config.output);
                is_terminal = console.is_terminal();
                Box::new(console)
            }
        };

        let styler = self
            .styler
            .unwrap_or_else(|| Styler::for_mode(self.config.color, is_terminal));
        let mut renderer = LineRenderer::new(self.config.render_config(), styler);
        if let Some(start_time) = self.start_time {
            renderer = renderer.with_start_time(start_time);
        }

        LoggerFactory {
            config: self.config,
            renderer: Arc::new(renderer),
            appender: Arc::new(Mutex::new(appender)),
            metrics: Arc::new(LoggerMetrics::new()),
            loggers: RwLock::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::WriterAppender;
    use crate::core::log_level::{LevelFilter, LogLevel};

    fn factory(config: SimpleLoggerConfig) -> LoggerFactory {
        LoggerFactory::builder(config)
            .appender(WriterAppender::new(Vec::new()))
            .build()
    }

    #[test]
    fn test_loggers_are_cached_by_name() {
        let factory = factory(SimpleLoggerConfig::default());
        let a = factory.get_logger("com.example.A");
        let again = factory.get_logger("com.example.A");
        let b = factory.get_logger("com.example.B");

        assert!(Arc::ptr_eq(&a, &again));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(factory.logger_names(), vec!["com.example.A", "com.example.B"]);
    }

    #[test]
    fn test_levels_resolved_from_config() {
        let config = SimpleLoggerConfig::from_properties_str(
            "defaultLogLevel=warn\nlog.com.example=debug\nlog.com.example.noisy=off",
        );
        let factory = factory(config);

        assert_eq!(factory.get_logger("com.example.Service").level(), LevelFilter::Debug);
        assert_eq!(factory.get_logger("com.example.noisy.Poller").level(), LevelFilter::Off);
        assert_eq!(factory.get_logger("org.other.Thing").level(), LevelFilter::Warn);
        assert!(!factory.get_logger("org.other.Thing").is_enabled(LogLevel::Info));
    }

    #[test]
    fn test_custom_appender_disables_auto_color() {
        let factory = factory(SimpleLoggerConfig::default());
        assert!(!factory.renderer().styler().is_enabled());
    }

    #[test]
    fn test_styler_override() {
        let factory = LoggerFactory::builder(SimpleLoggerConfig::default())
            .appender(WriterAppender::new(Vec::new()))
            .styler(Styler::new(true))
            .build();
        assert!(factory.renderer().styler().is_enabled());
    }

    #[test]
    fn test_shared_metrics() {
        let factory = factory(SimpleLoggerConfig::default());
        factory.get_logger("a").info("one");
        factory.get_logger("b").info("two");
        factory.get_logger("b").debug("filtered");

        assert_eq!(factory.metrics().events_written(), 2);
        assert_eq!(factory.metrics().events_filtered(), 1);
        factory.flush().expect("flush");
    }
}
