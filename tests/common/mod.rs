//! Shared utilities for integration tests.

use std::io;
use std::sync::{Arc, Mutex};

use hue_log::{Logger, LoggerConfig};

/// In-memory console that can be cloned into a logger and read back.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger without timestamps writing into a fresh capture.
pub fn capture_logger(config: LoggerConfig) -> (Logger, Capture) {
    let capture = Capture::default();
    let config = LoggerConfig {
        time_format: String::new(),
        ..config
    };
    (Logger::with_console(config, capture.clone()), capture)
}

/// Non-empty lines of a JSONL file, or none if it does not exist.
#[allow(dead_code)]
pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
