//! Timestamp formatting utilities
//!
//! Provides the date formatter used for the timestamp segment of a log line.
//! Formatters take `&mut self` and are not assumed safe for concurrent use;
//! the renderer shares them behind a mutex held for a single format call.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::sync::Arc;

const ISO8601_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Produces the timestamp text for "now"
pub trait DateFormatter: Send + fmt::Debug {
    fn format(&mut self, now: &DateTime<Utc>) -> String;
}

/// A date formatter shared between renderers
///
/// Access is serialized; callers lock it only around one `format` call.
pub type SharedDateFormatter = Arc<Mutex<Box<dyn DateFormatter>>>;

/// Wrap a formatter so it can be shared across threads
pub fn shared_formatter<F: DateFormatter + 'static>(formatter: F) -> SharedDateFormatter {
    let boxed: Box<dyn DateFormatter> = Box::new(formatter);
    Arc::new(Mutex::new(boxed))
}

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use styled_line_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// Allows specifying any strftime-compatible format string.
    ///
    /// # Examples
    ///
    /// ```
    /// use styled_line_logger::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    ///
    /// // Simple date only
    /// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Parse a configured format
    ///
    /// Accepts the names `iso8601`, `rfc3339` and `unix_millis`; anything else
    /// is treated as a strftime pattern and rejected if chrono cannot parse it.
    pub fn parse_pattern(pattern: &str) -> Result<Self> {
        let trimmed = pattern.trim();
        match trimmed.to_lowercase().as_str() {
            "iso8601" => return Ok(TimestampFormat::Iso8601),
            "rfc3339" => return Ok(TimestampFormat::Rfc3339),
            "unix_millis" | "unixmillis" => return Ok(TimestampFormat::UnixMillis),
            _ => {}
        }

        if trimmed.is_empty() {
            return Err(LoggerError::config("dateTimeFormat", "empty pattern"));
        }
        let format = TimestampFormat::Custom(trimmed.to_string());
        format.validate()?;
        Ok(format)
    }

    /// Check that a `Custom` pattern is one chrono can render
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(pattern)
                if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) =>
            {
                Err(LoggerError::config(
                    "dateTimeFormat",
                    format!("invalid strftime pattern '{}'", pattern),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Format a `DateTime<Utc>` according to this format
    ///
    /// A `Custom` pattern chrono cannot render falls back to ISO 8601.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format(ISO8601_PATTERN).to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::with_capacity(format_str.len() + 16);
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => datetime.format(ISO8601_PATTERN).to_string(),
                }
            }
        }
    }
}

impl DateFormatter for TimestampFormat {
    fn format(&mut self, now: &DateTime<Utc>) -> String {
        TimestampFormat::format(self, now)
    }
}
