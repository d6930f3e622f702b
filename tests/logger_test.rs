// `log` facade integration: records routed by target into capture sinks
#![cfg(feature = "logger")]

mod mocks;

use log_capture::{CaptureLogger, CaptureRegistry, Severity};
use mocks::MockOutput;
use std::sync::{Arc, OnceLock};

static REGISTRY: OnceLock<Arc<CaptureRegistry>> = OnceLock::new();
static OUTPUT: OnceLock<MockOutput> = OnceLock::new();

// The `log` facade accepts one backend per process, so the capture logger
// is installed once for the whole test binary.
#[ctor::ctor]
fn init() {
    let output = MockOutput::new();
    let registry = Arc::new(CaptureRegistry::new(Arc::new(output.clone())));
    CaptureLogger::install(Arc::clone(&registry)).expect("install capture logger");
    let _ = OUTPUT.set(output);
    let _ = REGISTRY.set(registry);
}

fn registry() -> &'static Arc<CaptureRegistry> {
    REGISTRY.get().expect("registry installed by ctor")
}

#[test]
fn test_records_routed_by_target() {
    log::info!(target: "routed_http", "start");
    log::error!(target: "routed_http", "failed");

    let logs = registry().try_get_logs("ROUTED_HTTP").unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].level(), Severity::Info);
    assert_eq!(logs[0].message(), "start");
    assert_eq!(logs[1].level(), Severity::Error);
    assert_eq!(logs[1].message(), "failed");

    // Both records were mirrored to the shared output stream.
    let lines = OUTPUT.get().expect("output installed by ctor").lines();
    assert!(lines.contains(&"INFO: start".to_string()));
    assert!(lines.contains(&"ERROR: failed".to_string()));
}

#[test]
fn test_all_macro_levels_are_captured() {
    log::error!(target: "macro_levels", "e");
    log::warn!(target: "macro_levels", "w");
    log::info!(target: "macro_levels", "i");
    log::debug!(target: "macro_levels", "d");
    log::trace!(target: "macro_levels", "t");

    let logs = registry().try_get_logs("macro_levels").unwrap();
    let levels: Vec<Severity> = logs.iter().map(|e| e.level()).collect();
    assert_eq!(
        levels,
        vec![
            Severity::Error,
            Severity::Warn,
            Severity::Info,
            Severity::Debug,
            Severity::Trace,
        ]
    );
}

#[test]
fn test_default_target_is_module_path() {
    log::warn!("untargeted");

    let logs = registry().try_get_logs("logger_test").unwrap();
    assert!(logs
        .iter()
        .any(|e| e.level() == Severity::Warn && e.message() == "untargeted"));
}

#[test]
fn test_record_arguments_formatted_at_log_time() {
    let mut value = 1;
    log::info!(target: "eager_fmt", "value = {}", value);
    value += 1;
    log::info!(target: "eager_fmt", "value = {}", value);

    let logs = registry().try_get_logs("eager_fmt").unwrap();
    assert_eq!(logs[0].message(), "value = 1");
    assert_eq!(logs[1].message(), "value = 2");
}

#[test]
fn test_logger_reports_everything_enabled() {
    let logger = CaptureLogger::new(Arc::clone(registry()));
    let metadata = log::Metadata::builder()
        .level(log::Level::Trace)
        .target("anything")
        .build();
    assert!(log::Log::enabled(&logger, &metadata));

    // flush is a no-op
    log::Log::flush(&logger);
}

#[test]
fn test_direct_record_dispatch() {
    let output = MockOutput::new();
    let local = Arc::new(CaptureRegistry::new(Arc::new(output.clone())));
    let logger = CaptureLogger::new(Arc::clone(&local));

    log::Log::log(
        &logger,
        &log::Record::builder()
            .level(log::Level::Debug)
            .target("direct")
            .args(format_args!("hello"))
            .build(),
    );

    let logs = local.try_get_logs("Direct").unwrap();
    assert_eq!(logs[0].level(), Severity::Debug);
    assert_eq!(logs[0].message(), "hello");
    assert_eq!(output.lines(), vec!["DEBUG: hello"]);
}
