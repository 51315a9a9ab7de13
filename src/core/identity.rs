//! Logger names

use std::sync::OnceLock;

/// Placeholder rendered when a logger has no name
pub const NULL_NAME: &str = "null";

/// Name of a logger plus its lazily derived short name
///
/// The short name is the part of the full name after the last `.`. It is
/// computed on first use and cached. Threads racing on first use may each
/// compute it, but only one value is stored and every caller sees that value.
#[derive(Debug, Default)]
pub struct LoggerIdentity {
    full_name: Option<String>,
    short_name: OnceLock<String>,
}

impl LoggerIdentity {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            short_name: OnceLock::new(),
        }
    }

    /// Identity for a logger created without a name
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Full name, or `"null"` when the logger has no name
    pub fn full_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(NULL_NAME)
    }

    pub fn short_name(&self) -> &str {
        self.short_name
            .get_or_init(|| compute_short_name(self.full_name()).to_string())
    }

    /// Whether the short name has been computed yet
    pub fn is_short_name_cached(&self) -> bool {
        self.short_name.get().is_some()
    }
}

impl Clone for LoggerIdentity {
    fn clone(&self) -> Self {
        let short_name = OnceLock::new();
        if let Some(cached) = self.short_name.get() {
            let _ = short_name.set(cached.clone());
        }
        Self {
            full_name: self.full_name.clone(),
            short_name,
        }
    }
}

/// Trailing component of a dotted name
pub fn compute_short_name(full_name: &str) -> &str {
    match full_name.rfind('.') {
        Some(idx) => &full_name[idx + 1..],
        None => full_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_short_name_after_last_dot() {
        assert_eq!(compute_short_name("com.example.Runner"), "Runner");
        assert_eq!(compute_short_name("Runner"), "Runner");
        assert_eq!(compute_short_name("trailing."), "");
    }

    #[test]
    fn test_short_name_is_memoized() {
        let identity = LoggerIdentity::new("com.example.Runner");
        assert!(!identity.is_short_name_cached());

        let first = identity.short_name() as *const str;
        assert!(identity.is_short_name_cached());
        let second = identity.short_name() as *const str;
        assert_eq!(first, second);
    }

    #[test]
    fn test_unnamed_identity() {
        let identity = LoggerIdentity::unnamed();
        assert_eq!(identity.full_name(), "null");
        assert_eq!(identity.short_name(), "null");
    }

    #[test]
    fn test_clone_keeps_cached_short_name() {
        let identity = LoggerIdentity::new("a.b.C");
        let _ = identity.short_name();
        let cloned = identity.clone();
        assert!(cloned.is_short_name_cached());
        assert_eq!(cloned.short_name(), "C");
    }

    #[test]
    fn test_concurrent_first_use_is_consistent() {
        let identity = Arc::new(LoggerIdentity::new("org.acme.deep.Service"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let identity = Arc::clone(&identity);
                thread::spawn(move || identity.short_name().to_string())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), "Service");
        }
    }
}
