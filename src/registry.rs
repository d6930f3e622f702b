use crate::common::LogEntry;
use crate::ports::provided::{CaptureError, LogProvider, LogSink};
use crate::ports::required::OutputWriter;
use crate::sink::CategorySink;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Registry of per-category capture sinks.
///
/// At most one sink exists per distinct category name under case-insensitive
/// comparison; sinks are created lazily on first use and live until the
/// registry is dropped. The output collaborator is shared by all sinks and
/// is not owned by the registry.
pub struct CaptureRegistry {
    output: Arc<dyn OutputWriter>,
    sinks: Mutex<HashMap<String, Arc<CategorySink>>>,
}

impl CaptureRegistry {
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use log_capture::{CaptureRegistry, ConsoleWriter, Severity};
    ///
    /// let registry = CaptureRegistry::new(Arc::new(ConsoleWriter));
    /// registry.get_or_create("Http").log(Severity::Info, "start");
    ///
    /// let logs = registry.try_get_logs("HTTP").unwrap();
    /// assert_eq!(logs.len(), 1);
    /// ```
    pub fn new(output: Arc<dyn OutputWriter>) -> Self {
        Self {
            output,
            sinks: Mutex::new(HashMap::new()),
        }
    }

    pub fn builder() -> CaptureRegistryBuilder {
        CaptureRegistryBuilder::new()
    }

    /// Returns the sink for `category`, creating and registering an empty
    /// one on first use.
    ///
    /// Lookup and insert happen under one lock, so concurrent calls for the
    /// same name observe a single sink. Any string is a valid category.
    pub fn get_or_create(&self, category: &str) -> Arc<CategorySink> {
        let mut sinks = self.lock_sinks();
        sinks
            .entry(category.to_lowercase())
            .or_insert_with(|| Arc::new(CategorySink::new(category, Arc::clone(&self.output))))
            .clone()
    }

    /// Snapshot of the entries captured for `category`, in insertion order.
    ///
    /// `None` when no sink exists for the name; a sink that exists but has
    /// captured nothing yields `Some` with an empty vector. Never mutates
    /// the registry.
    pub fn try_get_logs(&self, category: &str) -> Option<Vec<LogEntry>> {
        let sinks = self.lock_sinks();
        sinks
            .get(&category.to_lowercase())
            .map(|sink| sink.get_logs())
    }

    fn lock_sinks(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<CategorySink>>> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogProvider for CaptureRegistry {
    fn get_or_create(&self, category: &str) -> Arc<dyn LogSink> {
        CaptureRegistry::get_or_create(self, category)
    }
}

/// Builds a [`CaptureRegistry`], failing fast when the required output
/// collaborator is missing.
pub struct CaptureRegistryBuilder {
    output: Option<Arc<dyn OutputWriter>>,
}

impl CaptureRegistryBuilder {
    fn new() -> Self {
        Self { output: None }
    }

    pub fn with_output(mut self, output: Arc<dyn OutputWriter>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn build(self) -> Result<CaptureRegistry, CaptureError> {
        let output = self.output.ok_or(CaptureError::MissingOutput)?;
        Ok(CaptureRegistry::new(output))
    }
}
