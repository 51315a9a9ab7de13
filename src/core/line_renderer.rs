//! Log line rendering
//!
//! Builds the single text line for an event:
//!
//! ```text
//! [timestamp ][[thread] ][tid=N ][LEVEL ][name - ][ MARKER ...]message
//! ```

use super::config::RenderConfig;
use super::identity::LoggerIdentity;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use super::stack_trace::StackTraceRenderer;
use super::style::Styler;
use super::timestamp::DateFormatter;
use chrono::Utc;
use std::cell::RefCell;
use std::fmt::Write as _;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

const SP: char = ' ';
const TID_PREFIX: &str = "tid=";
const NAME_SEPARATOR: &str = " - ";
const UNNAMED_THREAD: &str = "<unnamed>";

/// Source of the per-thread ids shown in the `tid=` segment
static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Numeric id of the calling thread, assigned on first use and stable after
fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed).to_string())
            .clone()
    })
}

/// Name of the calling thread, computed once per thread
fn current_thread_name() -> String {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                std::thread::current()
                    .name()
                    .unwrap_or(UNNAMED_THREAD)
                    .to_string()
            })
            .clone()
    })
}

/// Renders events into text lines
///
/// Holds the render switches, the styler and the start instant elapsed-time
/// timestamps are measured from. All three are fixed at construction.
#[derive(Debug, Clone)]
pub struct LineRenderer {
    config: RenderConfig,
    styler: Styler,
    start_time: Instant,
    stack_trace: StackTraceRenderer,
}

impl LineRenderer {
    pub fn new(config: RenderConfig, styler: Styler) -> Self {
        Self {
            config,
            styler,
            start_time: Instant::now(),
            stack_trace: StackTraceRenderer::new(styler),
        }
    }

    /// Measure elapsed-time timestamps from `start_time`
    #[must_use]
    pub fn with_start_time(mut self, start_time: Instant) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn styler(&self) -> Styler {
        self.styler
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn stack_trace_renderer(&self) -> &StackTraceRenderer {
        &self.stack_trace
    }

    /// Render the line for `event` without a line terminator
    ///
    /// The event is only read. The message is the pattern with the event's
    /// arguments substituted.
    pub fn render_line(&self, event: &LogEvent, identity: &LoggerIdentity) -> String {
        let config = &self.config;
        let mut buf = String::with_capacity(32 + event.message_pattern.len());

        if config.show_date_time {
            self.append_timestamp(&mut buf);
            buf.push(SP);
        }

        if config.show_thread_name {
            buf.push('[');
            buf.push_str(&current_thread_name());
            buf.push_str("] ");
        }

        if config.show_thread_id {
            buf.push_str(TID_PREFIX);
            buf.push_str(&current_thread_id());
            buf.push(SP);
        }

        if config.level_in_brackets {
            buf.push('[');
        }
        buf.push_str(&self.render_level(event.level));
        if config.level_in_brackets {
            buf.push(']');
        }
        buf.push(SP);

        if config.show_short_log_name {
            buf.push_str(identity.short_name());
            buf.push_str(NAME_SEPARATOR);
        } else if config.show_log_name {
            buf.push_str(identity.full_name());
            buf.push_str(NAME_SEPARATOR);
        }

        if let Some(markers) = &event.markers {
            buf.push(SP);
            for marker in markers {
                buf.push_str(marker.name());
                buf.push(SP);
            }
        }

        buf.push_str(&event.formatted_message());
        buf
    }

    /// Level label with its style applied
    pub fn render_level(&self, level: LogLevel) -> String {
        self.styler.level(level.style())
    }

    /// Render the line, a line terminator and, if present, the stack trace
    pub fn render_event<W: io::Write + ?Sized>(
        &self,
        event: &LogEvent,
        identity: &LoggerIdentity,
        sink: &mut W,
    ) -> io::Result<()> {
        let line = self.render_line(event, identity);
        writeln!(sink, "{}", line)?;
        self.stack_trace
            .render_error(event.throwable.as_ref(), sink)
    }

    fn append_timestamp(&self, buf: &mut String) {
        match &self.config.date_formatter {
            Some(formatter) => {
                let now = Utc::now();
                let text = formatter.lock().format(&now);
                buf.push_str(&text);
            }
            None => {
                let elapsed = self.start_time.elapsed().as_millis();
                let _ = write!(buf, "{}", elapsed);
            }
        }
    }
}
