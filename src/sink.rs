use crate::common::{LogEntry, Severity};
use crate::ports::provided::LogSink;
use crate::ports::required::OutputWriter;
use std::error::Error;
use std::sync::{Arc, Mutex, PoisonError};

/// Append-only store of captured entries for one category.
///
/// Created by [`CaptureRegistry::get_or_create`](crate::CaptureRegistry::get_or_create)
/// on first use of a category name and shared for the life of the registry.
/// Appends are safe from concurrent threads; every level is captured.
pub struct CategorySink {
    category: String,
    output: Arc<dyn OutputWriter>,
    entries: Mutex<Vec<LogEntry>>,
}

impl CategorySink {
    pub(crate) fn new(category: &str, output: Arc<dyn OutputWriter>) -> Self {
        Self {
            category: category.to_string(),
            output,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Category name the sink was created for (first-seen casing).
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Appends an entry, then mirrors its line to the output collaborator.
    pub fn log(&self, level: Severity, message: &str) {
        let entry = LogEntry::new(level, message);
        let line = entry.to_string();
        self.lock_entries().push(entry);
        self.output.write_line(&line);
    }

    /// Formats `state` and `error` eagerly and captures the result.
    ///
    /// Only the formatted text is stored; the raw state is dropped on return.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use log_capture::{CaptureRegistry, ConsoleWriter, Severity};
    ///
    /// let registry = CaptureRegistry::new(Arc::new(ConsoleWriter));
    /// let sink = registry.get_or_create("Http");
    /// sink.log_with(Severity::Info, 404, None, |status, _err| {
    ///     format!("status {}", status)
    /// });
    ///
    /// assert_eq!(sink.get_logs()[0].message(), "status 404");
    /// ```
    pub fn log_with<S>(
        &self,
        level: Severity,
        state: S,
        error: Option<&(dyn Error + 'static)>,
        formatter: impl FnOnce(&S, Option<&(dyn Error + 'static)>) -> String,
    ) {
        let message = formatter(&state, error);
        self.log(level, &message);
    }

    /// Snapshot of captured entries in exact append order.
    ///
    /// Reflects only entries appended before the call; concurrent appends
    /// land in later snapshots.
    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.lock_entries().clone()
    }

    /// Always true: the sink captures everything regardless of level.
    pub fn is_enabled(&self, _level: Severity) -> bool {
        true
    }

    /// Scoped contexts are not captured; the returned handle is inert.
    pub fn begin_scope<S>(&self, _state: S) -> Scope {
        Scope
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, Vec<LogEntry>> {
        // A poisoned lock still holds valid entries; a panicking test
        // thread must not make them unobservable.
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for CategorySink {
    fn log(&self, level: Severity, message: &str) {
        CategorySink::log(self, level, message);
    }

    fn is_enabled(&self, level: Severity) -> bool {
        CategorySink::is_enabled(self, level)
    }
}

/// Inert scope handle. Dropping it does nothing.
pub struct Scope;
