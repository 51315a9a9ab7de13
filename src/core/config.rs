//! Logger configuration
//!
//! [`RenderConfig`] is the immutable set of switches the line renderer reads.
//! [`SimpleLoggerConfig`] is the process-level bag it is derived from, loadable
//! from a properties file, a properties string or JSON.

use super::error::{LoggerError, Result};
use super::log_level::LevelFilter;
use super::style::ColorMode;
use super::timestamp::{shared_formatter, SharedDateFormatter, TimestampFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Optional prefix accepted in front of every property key
pub const PROPERTY_PREFIX: &str = "org.slf4j.simpleLogger.";

/// Key prefix for per-logger levels, e.g. `log.com.example=debug`
pub const LOG_KEY_PREFIX: &str = "log.";

/// Key selecting the color mode
pub const COLOR_KEY: &str = "style.color";

/// Switches controlling which segments a rendered line contains
///
/// When `show_date_time` is set and no `date_formatter` is configured, the
/// timestamp segment shows milliseconds elapsed since the renderer started.
/// Only one of `show_short_log_name` and `show_log_name` takes effect, the
/// short name winning.
///
/// # Examples
///
/// ```
/// use styled_line_logger::core::{RenderConfig, TimestampFormat};
///
/// let config = RenderConfig::new()
///     .with_show_date_time(true)
///     .with_date_format(TimestampFormat::Iso8601)
///     .with_level_in_brackets(true);
/// assert!(config.date_formatter.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub show_date_time: bool,
    pub date_formatter: Option<SharedDateFormatter>,
    pub show_thread_name: bool,
    pub show_thread_id: bool,
    pub level_in_brackets: bool,
    pub show_short_log_name: bool,
    pub show_log_name: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_date_time: false,
            date_formatter: None,
            show_thread_name: true,
            show_thread_id: false,
            level_in_brackets: false,
            show_short_log_name: false,
            show_log_name: true,
        }
    }
}

impl RenderConfig {
    /// Create a new render configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that renders only the level and the message
    #[must_use]
    pub fn bare() -> Self {
        Self {
            show_thread_name: false,
            show_log_name: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_show_date_time(mut self, show: bool) -> Self {
        self.show_date_time = show;
        self
    }

    /// Use `format` for the timestamp segment instead of elapsed time
    ///
    /// A `Custom` pattern chrono cannot render is reported and leaves the
    /// formatter unset, so timestamps show elapsed milliseconds.
    #[must_use]
    pub fn with_date_format(mut self, format: TimestampFormat) -> Self {
        self.date_formatter = checked_date_format(Some(format)).map(shared_formatter);
        self
    }

    /// Use a caller supplied, possibly shared, date formatter
    #[must_use]
    pub fn with_date_formatter(mut self, formatter: SharedDateFormatter) -> Self {
        self.date_formatter = Some(formatter);
        self
    }

    /// Parse and apply a strftime pattern, rejecting invalid ones
    pub fn with_date_time_format(self, pattern: &str) -> Result<Self> {
        let format = TimestampFormat::parse_pattern(pattern)?;
        Ok(self.with_date_format(format))
    }

    #[must_use]
    pub fn with_show_thread_name(mut self, show: bool) -> Self {
        self.show_thread_name = show;
        self
    }

    #[must_use]
    pub fn with_show_thread_id(mut self, show: bool) -> Self {
        self.show_thread_id = show;
        self
    }

    #[must_use]
    pub fn with_level_in_brackets(mut self, brackets: bool) -> Self {
        self.level_in_brackets = brackets;
        self
    }

    #[must_use]
    pub fn with_show_short_log_name(mut self, show: bool) -> Self {
        self.show_short_log_name = show;
        self
    }

    #[must_use]
    pub fn with_show_log_name(mut self, show: bool) -> Self {
        self.show_log_name = show;
        self
    }
}

/// Stream the console appender writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
}

impl OutputTarget {
    /// Lenient parse: `System.out`/`stdout` select stdout, anything else stderr
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "system.out" | "stdout" => OutputTarget::Stdout,
            "system.err" | "stderr" => OutputTarget::Stderr,
            other => {
                eprintln!(
                    "[LOGGER WARNING] Unsupported log output '{}', using stderr",
                    other
                );
                OutputTarget::Stderr
            }
        }
    }
}

/// Process-level logger configuration
///
/// # Examples
///
/// ```
/// use styled_line_logger::core::{LevelFilter, SimpleLoggerConfig};
///
/// let config = SimpleLoggerConfig::from_properties_str(
///     "defaultLogLevel=warn\nlog.com.example=debug\nlevelInBrackets=true",
/// );
/// assert_eq!(config.level_for("com.example.Runner"), LevelFilter::Debug);
/// assert_eq!(config.level_for("org.other"), LevelFilter::Warn);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleLoggerConfig {
    pub default_level: LevelFilter,
    pub levels: BTreeMap<String, LevelFilter>,
    pub show_date_time: bool,
    pub date_time_format: Option<TimestampFormat>,
    pub show_thread_name: bool,
    pub show_thread_id: bool,
    pub level_in_brackets: bool,
    pub show_short_log_name: bool,
    pub show_log_name: bool,
    pub output: OutputTarget,
    pub color: ColorMode,
}

impl Default for SimpleLoggerConfig {
    fn default() -> Self {
        Self {
            default_level: LevelFilter::Info,
            levels: BTreeMap::new(),
            show_date_time: false,
            date_time_format: None,
            show_thread_name: true,
            show_thread_id: false,
            level_in_brackets: false,
            show_short_log_name: false,
            show_log_name: true,
            output: OutputTarget::Stderr,
            color: ColorMode::Auto,
        }
    }
}

impl SimpleLoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terse console preset: `[LEVEL] message` on stdout
    pub fn compact() -> Self {
        Self {
            show_thread_name: false,
            show_log_name: false,
            level_in_brackets: true,
            output: OutputTarget::Stdout,
            ..Self::default()
        }
    }

    /// Parse java-properties style `key=value` text
    ///
    /// Unknown keys are ignored. Malformed values fall back to defaults with a
    /// warning on stderr rather than failing.
    pub fn from_properties_str(text: &str) -> Self {
        let mut config = Self::default();
        for (key, value) in parse_properties(text) {
            config.apply_property(&key, &value);
        }
        config
    }

    /// Load a properties file from disk
    pub fn from_properties_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger properties",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Ok(Self::from_properties_str(&text))
    }

    /// Parse a JSON document; missing fields take their defaults
    ///
    /// An unusable `date_time_format` is reported and dropped, like in the
    /// properties loader.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.date_time_format = checked_date_format(config.date_time_format.take());
        Ok(config)
    }

    /// Apply a single property, with or without the key prefix
    pub fn apply_property(&mut self, key: &str, value: &str) {
        let key = key.strip_prefix(PROPERTY_PREFIX).unwrap_or(key);

        if let Some(logger_name) = key.strip_prefix(LOG_KEY_PREFIX) {
            self.levels
                .insert(logger_name.to_string(), LevelFilter::parse_lenient(value));
            return;
        }

        match key {
            "defaultLogLevel" => self.default_level = LevelFilter::parse_lenient(value),
            "showDateTime" => self.show_date_time = parse_bool(value),
            "dateTimeFormat" => {
                self.date_time_format = match TimestampFormat::parse_pattern(value) {
                    Ok(format) => Some(format),
                    Err(e) => {
                        warn_elapsed_fallback(&e);
                        None
                    }
                }
            }
            "showThreadName" => self.show_thread_name = parse_bool(value),
            "showThreadId" => self.show_thread_id = parse_bool(value),
            "levelInBrackets" => self.level_in_brackets = parse_bool(value),
            "showShortLogName" => self.show_short_log_name = parse_bool(value),
            "showLogName" => self.show_log_name = parse_bool(value),
            "logFile" => self.output = OutputTarget::parse_lenient(value),
            COLOR_KEY => self.color = ColorMode::parse_lenient(value),
            _ => {}
        }
    }

    /// Resolve the level for a logger name
    ///
    /// Checks the full name, then each shorter dotted prefix, then falls back
    /// to `default_level`.
    pub fn level_for(&self, name: &str) -> LevelFilter {
        let mut candidate = name;
        loop {
            if let Some(level) = self.levels.get(candidate) {
                return *level;
            }
            match candidate.rfind('.') {
                Some(idx) => candidate = &candidate[..idx],
                None => return self.default_level,
            }
        }
    }

    /// Build the immutable render switches from this configuration
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            show_date_time: self.show_date_time,
            date_formatter: self.date_time_format.clone().map(shared_formatter),
            show_thread_name: self.show_thread_name,
            show_thread_id: self.show_thread_id,
            level_in_brackets: self.level_in_brackets,
            show_short_log_name: self.show_short_log_name,
            show_log_name: self.show_log_name,
        }
    }
}

fn checked_date_format(format: Option<TimestampFormat>) -> Option<TimestampFormat> {
    let format = format?;
    match format.validate() {
        Ok(()) => Some(format),
        Err(e) => {
            warn_elapsed_fallback(&e);
            None
        }
    }
}

fn warn_elapsed_fallback(e: &LoggerError) {
    eprintln!(
        "[LOGGER WARNING] {}; timestamps will show elapsed milliseconds",
        e
    );
}

fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn parse_properties(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let split = line.find(['=', ':'])?;
            let key = line[..split].trim();
            let value = line[split + 1..].trim();
            if key.is_empty() {
                None
            } else {
                Some((key.to_string(), value.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_defaults() {
        let config = RenderConfig::default();
        assert!(!config.show_date_time);
        assert!(config.date_formatter.is_none());
        assert!(config.show_thread_name);
        assert!(!config.show_thread_id);
        assert!(!config.level_in_brackets);
        assert!(!config.show_short_log_name);
        assert!(config.show_log_name);
    }

    #[test]
    fn test_render_config_builder() {
        let config = RenderConfig::bare()
            .with_show_thread_id(true)
            .with_level_in_brackets(true)
            .with_show_short_log_name(true);

        assert!(!config.show_thread_name);
        assert!(config.show_thread_id);
        assert!(config.level_in_brackets);
        assert!(config.show_short_log_name);
        assert!(!config.show_log_name);
    }

    #[test]
    fn test_strict_date_time_format() {
        assert!(RenderConfig::new().with_date_time_format("%H:%M").is_ok());
        let err = RenderConfig::new().with_date_time_format("%Q").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_properties_parsing() {
        let config = SimpleLoggerConfig::from_properties_str(
            r#"
            # comment
            ! another comment
            org.slf4j.simpleLogger.defaultLogLevel = debug
            showDateTime=TRUE
            dateTimeFormat=%H:%M:%S
            showThreadName=false
            showThreadId: true
            levelInBrackets=yes
            showShortLogName=true
            logFile=System.out
            style.color=never
            log.org.acme=off
            "#,
        );

        assert_eq!(config.default_level, LevelFilter::Debug);
        assert!(config.show_date_time);
        assert_eq!(
            config.date_time_format,
            Some(TimestampFormat::Custom("%H:%M:%S".to_string()))
        );
        assert!(!config.show_thread_name);
        assert!(config.show_thread_id);
        // only "true" enables a flag
        assert!(!config.level_in_brackets);
        assert!(config.show_short_log_name);
        assert_eq!(config.output, OutputTarget::Stdout);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.levels.get("org.acme"), Some(&LevelFilter::Off));
    }

    #[test]
    fn test_lenient_fallbacks() {
        let config = SimpleLoggerConfig::from_properties_str(
            "defaultLogLevel=chatty\ndateTimeFormat=%Q\nlogFile=/var/log/x.log",
        );
        assert_eq!(config.default_level, LevelFilter::Info);
        assert_eq!(config.date_time_format, None);
        assert_eq!(config.output, OutputTarget::Stderr);
    }

    #[test]
    fn test_level_resolution_walks_prefixes() {
        let mut config = SimpleLoggerConfig::default();
        config.levels.insert("com.example".to_string(), LevelFilter::Debug);
        config.levels.insert("com.example.db.Pool".to_string(), LevelFilter::Trace);
        config.levels.insert("com".to_string(), LevelFilter::Warn);

        assert_eq!(config.level_for("com.example.db.Pool"), LevelFilter::Trace);
        assert_eq!(config.level_for("com.example.db.Conn"), LevelFilter::Debug);
        assert_eq!(config.level_for("com.other.X"), LevelFilter::Warn);
        assert_eq!(config.level_for("org.X"), LevelFilter::Info);
        assert_eq!(config.level_for(""), LevelFilter::Info);
    }

    #[test]
    fn test_json_config() {
        let config = SimpleLoggerConfig::from_json(
            r#"{"default_level":"warn","level_in_brackets":true,"output":"stdout",
                "levels":{"com.example":"trace"},"date_time_format":"Iso8601"}"#,
        )
        .expect("valid json");

        assert_eq!(config.default_level, LevelFilter::Warn);
        assert!(config.level_in_brackets);
        assert!(config.show_thread_name);
        assert_eq!(config.output, OutputTarget::Stdout);
        assert_eq!(config.level_for("com.example.A"), LevelFilter::Trace);
        assert_eq!(config.date_time_format, Some(TimestampFormat::Iso8601));

        assert!(matches!(
            SimpleLoggerConfig::from_json("{not json"),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_json_invalid_date_pattern_falls_back_to_elapsed_time() {
        let config = SimpleLoggerConfig::from_json(
            r#"{"show_date_time":true,"date_time_format":{"Custom":"%Q"}}"#,
        )
        .expect("valid json");

        assert!(config.show_date_time);
        assert_eq!(config.date_time_format, None);
        assert!(config.render_config().date_formatter.is_none());

        let config = SimpleLoggerConfig::from_json(r#"{"date_time_format":{"Custom":"%H:%M"}}"#)
            .expect("valid json");
        assert_eq!(
            config.date_time_format,
            Some(TimestampFormat::Custom("%H:%M".to_string()))
        );
    }

    #[test]
    fn test_with_date_format_drops_invalid_pattern() {
        let config = RenderConfig::bare()
            .with_show_date_time(true)
            .with_date_format(TimestampFormat::Custom("%Q".to_string()));
        assert!(config.date_formatter.is_none());

        let config = RenderConfig::bare().with_date_format(TimestampFormat::Custom("%Y".to_string()));
        assert!(config.date_formatter.is_some());
    }

    #[test]
    fn test_render_config_from_logger_config() {
        let mut config = SimpleLoggerConfig::compact();
        config.date_time_format = Some(TimestampFormat::UnixMillis);
        let render = config.render_config();

        assert!(render.level_in_brackets);
        assert!(!render.show_thread_name);
        assert!(!render.show_log_name);
        assert!(render.date_formatter.is_some());
    }
}
