// Provided ports - the surface this library implements
use crate::common::Severity;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub enum CaptureError {
    MissingOutput,
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureError::MissingOutput => {
                write!(f, "MissingOutput: registry requires an output collaborator")
            }
        }
    }
}

/// Capability surface of one per-category sink.
pub trait LogSink: Send + Sync {
    /// Captures an entry and mirrors it to the output collaborator.
    fn log(&self, level: Severity, message: &str);

    /// Capture policy is capture-everything; always true.
    fn is_enabled(&self, level: Severity) -> bool;
}

/// Creates or returns per-category sinks.
pub trait LogProvider: Send + Sync {
    /// Returns the sink for `category`, creating it on first use.
    /// Category names are compared case-insensitively.
    fn get_or_create(&self, category: &str) -> Arc<dyn LogSink>;
}
