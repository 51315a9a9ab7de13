//! Log level definitions

use super::style::{LevelStyle, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 10,
    #[default]
    Info = 20,
    Warn = 30,
    Error = 40,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Numeric value used by the logging facade (0, 10, 20, 30, 40)
    pub fn to_int(&self) -> i32 {
        *self as i32
    }

    /// Map a facade numeric level onto a `LogLevel`
    ///
    /// Values that do not name a known level are clamped to `Error`, so they
    /// render the same way an error does instead of being rejected.
    pub fn from_int(value: i32) -> Self {
        match value {
            0 => LogLevel::Trace,
            10 => LogLevel::Debug,
            20 => LogLevel::Info,
            30 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Style and label used when the level is rendered in a log line
    pub fn style(&self) -> LevelStyle {
        match self {
            LogLevel::Trace => LevelStyle::new(Style::Debug, "TRACE"),
            LogLevel::Debug => LevelStyle::new(Style::Debug, "DEBUG"),
            LogLevel::Info => LevelStyle::new(Style::Info, "INFO"),
            LogLevel::Warn => LevelStyle::new(Style::Warning, "WARNING"),
            LogLevel::Error => LevelStyle::new(Style::Error, "ERROR"),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Threshold a logger compares event levels against
///
/// `Off` disables a logger entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LevelFilter {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LevelFilter {
    /// Whether an event at `level` passes this filter
    #[inline]
    pub fn allows(&self, level: LogLevel) -> bool {
        match self.threshold() {
            Some(min) => level >= min,
            None => false,
        }
    }

    fn threshold(&self) -> Option<LogLevel> {
        match self {
            LevelFilter::Trace => Some(LogLevel::Trace),
            LevelFilter::Debug => Some(LogLevel::Debug),
            LevelFilter::Info => Some(LogLevel::Info),
            LevelFilter::Warn => Some(LogLevel::Warn),
            LevelFilter::Error => Some(LogLevel::Error),
            LevelFilter::Off => None,
        }
    }

    /// Lenient parse used by the configuration loader: anything that is
    /// not a recognised level name becomes `Info`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|err| {
            eprintln!("[LOGGER WARNING] {}, falling back to 'info'", err);
            LevelFilter::Info
        })
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("off") {
            return Ok(LevelFilter::Off);
        }
        s.parse::<LogLevel>()
            .map(LevelFilter::from)
            .map_err(|_| format!("Invalid level filter: '{}'", s))
    }
}
