// Integration with the `log` facade
use crate::common::Severity;
use crate::registry::CaptureRegistry;
use log::{Log, Metadata, Record};
use std::sync::Arc;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Trace,
        }
    }
}

/// Routes `log` records into a [`CaptureRegistry`], one sink per target.
///
/// The record target names the category; the record arguments are formatted
/// eagerly at log time, so only the resulting text is retained.
pub struct CaptureLogger {
    registry: Arc<CaptureRegistry>,
}

impl CaptureLogger {
    pub fn new(registry: Arc<CaptureRegistry>) -> Self {
        Self { registry }
    }

    /// Installs `registry` as the process-wide `log` backend and raises the
    /// max level to `Trace` so nothing is filtered before capture.
    ///
    /// `log` accepts one backend per process; a second install returns
    /// `SetLoggerError`.
    pub fn install(registry: Arc<CaptureRegistry>) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(CaptureLogger::new(registry)))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let sink = self.registry.get_or_create(record.target());
        sink.log(record.level().into(), &record.args().to_string());
    }

    fn flush(&self) {}
}
