use std::time::{Duration, Instant};

/// How long a transient notice stays visible before the UI drops it.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient outcome message raised when a save or submit settles.
///
/// Notices are dismissible and expire on their own; they never block input.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    severity: Severity,
    raised: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::raise(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::raise(message, Severity::Error)
    }

    fn raise(message: impl Into<String>, severity: Severity) -> Self {
        Notice {
            message: message.into(),
            severity,
            raised: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_expired(&self) -> bool {
        self.raised.elapsed() >= NOTICE_TTL
    }
}
