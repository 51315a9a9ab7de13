//! Appender implementations

pub mod console;
pub mod writer;

pub use console::ConsoleAppender;
pub use writer::WriterAppender;

pub use crate::core::Appender;
