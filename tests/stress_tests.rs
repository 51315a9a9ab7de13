//! Stress tests for shared logger state
//!
//! These tests verify:
//! - The factory hands out one logger per name under concurrent lookups
//! - Short names stay consistent when many threads race on first use
//! - A shared date formatter is serialized across concurrent renders

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use styled_line_logger::prelude::*;
use styled_line_logger::{shared_formatter, DateFormatter};

#[test]
fn test_concurrent_get_logger_returns_single_instance() {
    let factory = Arc::new(
        LoggerFactory::builder(SimpleLoggerConfig::compact())
            .appender(WriterAppender::new(std::io::sink()))
            .build(),
    );

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let factory = Arc::clone(&factory);
            thread::spawn(move || {
                (0..100)
                    .map(|i| factory.get_logger(&format!("pool.worker{}", i % 10)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let all: Vec<Arc<Logger>> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("thread panicked"))
        .collect();

    assert_eq!(factory.logger_names().len(), 10);
    for logger in &all {
        let canonical = factory.get_logger(logger.name());
        assert!(Arc::ptr_eq(logger, &canonical));
    }
}

#[test]
fn test_short_name_race_is_consistent() {
    let renderer = Arc::new(LineRenderer::new(
        RenderConfig::bare().with_show_short_log_name(true),
        Styler::plain(),
    ));

    for round in 0..20 {
        let identity = Arc::new(LoggerIdentity::new(format!("org.acme.module{}.Service", round)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let identity = Arc::clone(&identity);
                let renderer = Arc::clone(&renderer);
                thread::spawn(move || {
                    renderer.render_line(&LogEvent::new(LogLevel::Info, "up"), &identity)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), "INFO Service - up");
        }
    }
}

/// Formatter that detects overlapping calls
#[derive(Debug)]
struct ExclusiveFormatter {
    active: Arc<AtomicUsize>,
    calls: Arc<AtomicUsize>,
}

impl DateFormatter for ExclusiveFormatter {
    fn format(&mut self, _now: &DateTime<Utc>) -> String {
        let concurrent = self.active.fetch_add(1, Ordering::SeqCst);
        assert_eq!(concurrent, 0, "formatter entered concurrently");
        thread::yield_now();
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.active.fetch_sub(1, Ordering::SeqCst);
        "T".to_string()
    }
}

#[test]
fn test_shared_formatter_calls_are_serialized() {
    let active = Arc::new(AtomicUsize::new(0));
    let calls = Arc::new(AtomicUsize::new(0));
    let formatter = shared_formatter(ExclusiveFormatter {
        active: Arc::clone(&active),
        calls: Arc::clone(&calls),
    });

    let renderer = Arc::new(LineRenderer::new(
        RenderConfig::bare()
            .with_show_date_time(true)
            .with_date_formatter(formatter),
        Styler::plain(),
    ));
    let identity = Arc::new(LoggerIdentity::new("x"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let renderer = Arc::clone(&renderer);
            let identity = Arc::clone(&identity);
            thread::spawn(move || {
                for _ in 0..200 {
                    let line = renderer.render_line(&LogEvent::new(LogLevel::Info, "m"), &identity);
                    assert_eq!(line, "T INFO m");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 8 * 200);
}
