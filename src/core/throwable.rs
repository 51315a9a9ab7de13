//! Captured errors with stack frames and cause chains

use std::error::Error;
use std::fmt;

/// One frame of a captured stack trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub declaring_type: String,
    pub method_name: String,
    pub file_name: Option<String>,
    /// `None` when the line is unknown
    pub line_number: Option<u32>,
    pub is_native: bool,
}

impl StackFrame {
    pub fn new(declaring_type: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            method_name: method_name.into(),
            file_name: None,
            line_number: None,
            is_native: false,
        }
    }

    #[must_use]
    pub fn with_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn with_line(mut self, line_number: u32) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Set the line from a raw value where any negative number means unknown
    #[must_use]
    pub fn with_raw_line(mut self, line_number: i64) -> Self {
        self.line_number = u32::try_from(line_number).ok();
        self
    }

    #[must_use]
    pub fn native(mut self) -> Self {
        self.is_native = true;
        self
    }

    /// Location token shown in parentheses after the method
    pub fn location(&self) -> String {
        if self.is_native {
            return "Native Method".to_string();
        }
        match (&self.file_name, self.line_number) {
            (None, _) => "Unknown Source".to_string(),
            (Some(file), Some(line)) => format!("{}:{}", file, line),
            (Some(file), None) => file.clone(),
        }
    }
}

/// An error value together with its frames and cause
///
/// Cause chains must be finite. Rendering walks `cause` until it runs out and
/// does not guard against a chain that loops back on itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowableInfo {
    pub type_name: String,
    pub message: Option<String>,
    pub frames: Vec<StackFrame>,
    pub cause: Option<Box<ThrowableInfo>>,
}

impl ThrowableInfo {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: None,
            frames: Vec::new(),
            cause: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(frame);
        self
    }

    #[must_use]
    pub fn with_frames(mut self, frames: impl IntoIterator<Item = StackFrame>) -> Self {
        self.frames.extend(frames);
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: ThrowableInfo) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Capture a Rust error and the chain of its `source()`s
    ///
    /// The outer error is named after its static type. Sources are only
    /// reachable as trait objects, so they are named after the leading token of
    /// their `Debug` output (usually the type or variant name). No frames are
    /// captured.
    pub fn from_error<E: Error + 'static>(err: &E) -> Self {
        let mut sources = Vec::new();
        let mut next = err.source();
        while let Some(source) = next {
            sources.push(Self::new(debug_head(source)).with_message(source.to_string()));
            next = source.source();
        }

        let mut chain: Option<ThrowableInfo> = None;
        while let Some(mut info) = sources.pop() {
            info.cause = chain.map(Box::new);
            chain = Some(info);
        }

        let mut top = Self::new(std::any::type_name::<E>()).with_message(err.to_string());
        top.cause = chain.map(Box::new);
        top
    }

    /// Iterate over this error followed by every cause, outermost first
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    pub fn root_cause(&self) -> &ThrowableInfo {
        self.chain().last().unwrap_or(self)
    }
}

impl fmt::Display for ThrowableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.type_name, message),
            None => write!(f, "{}", self.type_name),
        }
    }
}

/// Iterator over a cause chain
pub struct Chain<'a> {
    next: Option<&'a ThrowableInfo>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ThrowableInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause.as_deref();
        Some(current)
    }
}

fn debug_head(err: &dyn Error) -> String {
    let debug = format!("{:?}", err);
    let head = debug
        .split(|c: char| c == '(' || c == '{' || c.is_whitespace())
        .next()
        .unwrap_or_default();
    if head.is_empty() {
        "Error".to_string()
    } else {
        head.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "disk unplugged")
        }
    }

    impl Error for Inner {}

    #[derive(Debug)]
    struct Outer {
        inner: Inner,
    }

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "save failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.inner)
        }
    }

    #[test]
    fn test_location_tokens() {
        let frame = StackFrame::new("com.x.Y", "run").with_file("Y.java").with_line(42);
        assert_eq!(frame.location(), "Y.java:42");

        let frame = StackFrame::new("com.x.Y", "run").with_file("Y.java");
        assert_eq!(frame.location(), "Y.java");

        let frame = StackFrame::new("com.x.Y", "run");
        assert_eq!(frame.location(), "Unknown Source");

        let frame = StackFrame::new("com.x.Y", "run")
            .with_file("Y.java")
            .with_line(7)
            .native();
        assert_eq!(frame.location(), "Native Method");
    }

    #[test]
    fn test_negative_raw_line_is_unknown() {
        let frame = StackFrame::new("A", "b").with_file("A.java").with_raw_line(-1);
        assert_eq!(frame.line_number, None);
        assert_eq!(frame.location(), "A.java");

        let frame = StackFrame::new("A", "b").with_file("A.java").with_raw_line(0);
        assert_eq!(frame.location(), "A.java:0");
    }

    #[test]
    fn test_chain_walks_causes_in_order() {
        let err = ThrowableInfo::new("Outer")
            .with_cause(ThrowableInfo::new("Middle").with_cause(ThrowableInfo::new("Root")));

        let names: Vec<&str> = err.chain().map(|t| t.type_name.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Middle", "Root"]);
        assert_eq!(err.root_cause().type_name, "Root");
    }

    #[test]
    fn test_display() {
        assert_eq!(ThrowableInfo::new("IllegalStateException").to_string(), "IllegalStateException");
        assert_eq!(
            ThrowableInfo::new("IOException").with_message("closed").to_string(),
            "IOException: closed"
        );
    }

    #[test]
    fn test_from_error_captures_sources() {
        let err = Outer { inner: Inner };
        let info = ThrowableInfo::from_error(&err);

        assert!(info.type_name.ends_with("Outer"));
        assert_eq!(info.message.as_deref(), Some("save failed"));

        let cause = info.cause.as_deref().expect("source captured");
        assert_eq!(cause.type_name, "Inner");
        assert_eq!(cause.message.as_deref(), Some("disk unplugged"));
        assert!(cause.cause.is_none());
    }
}
