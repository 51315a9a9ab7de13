//! Positional placeholder substitution
//!
//! Patterns use `{}` as the placeholder. A placeholder preceded by a single
//! backslash is printed literally as `{}` and does not consume an argument; a
//! doubled backslash prints one backslash and the placeholder is substituted.

use super::argument::ArgValue;
use super::throwable::ThrowableInfo;
use std::fmt::Write;

const DELIM: &str = "{}";
const ESCAPE: u8 = b'\\';

/// Substitute `args` into the `{}` placeholders of `pattern`, left to right
///
/// Placeholders without a matching argument are left as they are and
/// arguments without a placeholder are ignored.
pub fn format_message(pattern: &str, args: &[ArgValue]) -> String {
    if args.is_empty() {
        return pattern.to_string();
    }

    let bytes = pattern.as_bytes();
    let mut out = String::with_capacity(pattern.len() + 16 * args.len());
    let mut cursor = 0;
    let mut arg_idx = 0;

    while arg_idx < args.len() {
        let found = match pattern[cursor..].find(DELIM) {
            Some(offset) => cursor + offset,
            None => break,
        };

        if is_escaped(bytes, found) {
            if is_escaped(bytes, found - 1) {
                // "\\{}" keeps one backslash and substitutes
                out.push_str(&pattern[cursor..found - 1]);
                let _ = write!(out, "{}", args[arg_idx]);
                arg_idx += 1;
                cursor = found + DELIM.len();
            } else {
                // "\{}" is a literal placeholder
                out.push_str(&pattern[cursor..found - 1]);
                out.push('{');
                cursor = found + 1;
            }
        } else {
            out.push_str(&pattern[cursor..found]);
            let _ = write!(out, "{}", args[arg_idx]);
            arg_idx += 1;
            cursor = found + DELIM.len();
        }
    }

    out.push_str(&pattern[cursor..]);
    out
}

fn is_escaped(bytes: &[u8], idx: usize) -> bool {
    idx > 0 && bytes[idx - 1] == ESCAPE
}

/// Message pattern, arguments and throwable after facade normalization
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedParameters {
    pub message: String,
    pub arguments: Vec<ArgValue>,
    pub throwable: Option<ThrowableInfo>,
}

impl NormalizedParameters {
    /// Promote a trailing throwable argument to the event's throwable
    ///
    /// Only happens when no explicit throwable was supplied. The promoted
    /// argument is removed from the argument list.
    pub fn normalize(
        message: impl Into<String>,
        mut arguments: Vec<ArgValue>,
        throwable: Option<ThrowableInfo>,
    ) -> Self {
        let message = message.into();
        if throwable.is_some() {
            return Self { message, arguments, throwable };
        }

        let candidate = match arguments.last() {
            Some(ArgValue::Throwable(_)) => match arguments.pop() {
                Some(ArgValue::Throwable(t)) => Some(*t),
                _ => None,
            },
            _ => None,
        };

        Self {
            message,
            arguments,
            throwable: candidate,
        }
    }

    pub fn formatted_message(&self) -> String {
        format_message(&self.message, &self.arguments)
    }
}
