pub mod common;
pub mod ports;
pub mod registry;
pub mod sink;

#[cfg(feature = "logger")]
pub mod logger;

pub use common::{LogEntry, Severity};
pub use registry::{CaptureRegistry, CaptureRegistryBuilder};
pub use sink::{CategorySink, Scope};

pub use ports::provided::{CaptureError, LogProvider, LogSink};
pub use ports::required::{ConsoleWriter, OutputWriter};

#[cfg(feature = "logger")]
pub use logger::CaptureLogger;
