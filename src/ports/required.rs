// Required ports - collaborators the host test harness supplies

/// Test-run output stream receiving one formatted line per captured entry.
///
/// Shared by every sink of a registry. Implementations must tolerate
/// concurrent `write_line` calls; the registry does not serialize them.
/// The registry never closes or otherwise manages the collaborator.
pub trait OutputWriter: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes lines to stdout, where the test harness captures them.
pub struct ConsoleWriter;

impl OutputWriter for ConsoleWriter {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}
