use super::severity::Severity;
use std::fmt;

/// Immutable captured log entry: severity plus formatted message text.
///
/// `Display` is the single-line representation mirrored to the output
/// collaborator.
///
/// # Examples
///
/// ```
/// use log_capture::{LogEntry, Severity};
///
/// let entry = LogEntry::new(Severity::Info, "start");
/// assert_eq!(entry.level(), Severity::Info);
/// assert_eq!(entry.message(), "start");
/// assert_eq!(entry.to_string(), "INFO: start");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    level: Severity,
    message: String,
}

impl LogEntry {
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}
