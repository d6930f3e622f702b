// MockOutput - records every line the registry mirrors to the test-run output
use log_capture::OutputWriter;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockOutput {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl OutputWriter for MockOutput {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
