//! Log event structure

use super::argument::ArgValue;
use super::log_level::LogLevel;
use super::message_formatter::{format_message, NormalizedParameters};
use super::throwable::ThrowableInfo;
use std::fmt;
use std::sync::Arc;

/// Named tag attached to an event independently of its level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    name: Arc<str>,
}

impl Marker {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single call into the logger, before rendering
///
/// `markers` distinguishes "no markers" (`None`) from an attached but empty
/// list (`Some(vec![])`); the two render differently.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub level: LogLevel,
    pub markers: Option<Vec<Marker>>,
    pub message_pattern: String,
    pub arguments: Vec<ArgValue>,
    pub throwable: Option<ThrowableInfo>,
}

impl LogEvent {
    pub fn new(level: LogLevel, message_pattern: impl Into<String>) -> Self {
        Self {
            level,
            markers: None,
            message_pattern: message_pattern.into(),
            arguments: Vec::new(),
            throwable: None,
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.get_or_insert_with(Vec::new).push(marker);
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: Vec<Marker>) -> Self {
        self.markers = Some(markers);
        self
    }

    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<ArgValue>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = ArgValue>) -> Self {
        self.arguments.extend(args);
        self
    }

    #[must_use]
    pub fn with_throwable(mut self, throwable: ThrowableInfo) -> Self {
        self.throwable = Some(throwable);
        self
    }

    /// Message with arguments substituted into the pattern
    pub fn formatted_message(&self) -> String {
        format_message(&self.message_pattern, &self.arguments)
    }

    /// Apply facade normalization, promoting a trailing throwable argument
    #[must_use]
    pub fn normalized(self) -> Self {
        let np = NormalizedParameters::normalize(
            self.message_pattern,
            self.arguments,
            self.throwable,
        );
        Self {
            level: self.level,
            markers: self.markers,
            message_pattern: np.message,
            arguments: np.arguments,
            throwable: np.throwable,
        }
    }
}
