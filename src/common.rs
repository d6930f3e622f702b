// Common value types

pub mod entry;
pub mod severity;

pub use entry::LogEntry;
pub use severity::Severity;
