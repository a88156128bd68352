//! Output sinks: the console stream and the JSONL file.
//!
//! # Design Decisions
//! - One mutex per sink; a whole line is written per critical section
//! - Poisoned locks are recovered, a panicking writer must not disable logging
//! - The file is opened lazily and reopened after failures or path changes

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Serialized access to the console writer.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write `line` in one locked write and flush.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = lock(&self.writer);
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }

    /// Swap the underlying writer.
    pub fn replace<W: Write + Send + 'static>(&self, writer: W) {
        *lock(&self.writer) = Box::new(writer);
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct OpenFile {
    path: PathBuf,
    file: Option<File>,
    /// A failed write may have left a partial record at the end of `path`.
    torn: bool,
}

/// Append-only JSON Lines file.
#[derive(Debug, Default)]
pub struct JsonlSink {
    state: Mutex<OpenFile>,
}

impl JsonlSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` (which must end in `\n`) to `path`, opening or
    /// reopening the file as needed.
    pub fn append(&self, path: &Path, line: &str) -> io::Result<()> {
        let mut state = lock(&self.state);

        if state.path != path {
            state.file = None;
            state.torn = false;
            state.path = path.to_path_buf();
        }
        if state.file.is_none() {
            state.file = Some(open_append(path)?);
        }

        let OpenFile { file, torn, .. } = &mut *state;
        let result = match file.as_mut() {
            Some(f) => write_record(f, line, torn),
            None => Ok(()),
        };
        if result.is_err() {
            // Retry the open on the next call.
            *file = None;
        }
        result
    }

    /// Drop the open handle, if any.
    pub fn close(&self) {
        let mut state = lock(&self.state);
        state.file = None;
    }

    pub fn is_open(&self) -> bool {
        lock(&self.state).file.is_some()
    }
}

/// Write one record. After a failed write the next record starts on a fresh
/// line, so a torn fragment never swallows it.
fn write_record<W: Write>(writer: &mut W, line: &str, torn: &mut bool) -> io::Result<()> {
    let result = if *torn {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push('\n');
        buf.push_str(line);
        writer.write_all(buf.as_bytes())
    } else {
        writer.write_all(line.as_bytes())
    };
    *torn = result.is_err();
    result
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts `budget` bytes, then fails every write.
    struct FailAfter {
        out: Vec<u8>,
        budget: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = buf.len().min(self.budget);
            self.out.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_record_after_torn_write_starts_new_line() {
        let mut writer = FailAfter { out: Vec::new(), budget: 12 };
        let mut torn = false;
        write_record(&mut writer, "{\"a\":1}\n", &mut torn).unwrap();
        assert!(write_record(&mut writer, "{\"a\":2}\n", &mut torn).is_err());
        assert!(torn);

        writer.budget = usize::MAX;
        write_record(&mut writer, "{\"a\":3}\n", &mut torn).unwrap();
        assert!(!torn);
        assert_eq!(
            String::from_utf8(writer.out).unwrap(),
            "{\"a\":1}\n{\"a\"\n{\"a\":3}\n"
        );
    }

    #[test]
    fn test_console_write_and_replace() {
        let first = Capture::default();
        let second = Capture::default();
        let sink = ConsoleSink::new(first.clone());
        sink.write_line("one\n").unwrap();
        sink.replace(second.clone());
        sink.write_line("two\n").unwrap();
        assert_eq!(&*first.0.lock().unwrap(), b"one\n");
        assert_eq!(&*second.0.lock().unwrap(), b"two\n");
    }

    #[test]
    fn test_jsonl_creates_parents_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/log.jsonl");
        let sink = JsonlSink::new();
        assert!(!sink.is_open());
        sink.append(&path, "{\"a\":1}\n").unwrap();
        sink.append(&path, "{\"a\":2}\n").unwrap();
        assert!(sink.is_open());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"a\":2}\n");
    }

    #[test]
    fn test_jsonl_follows_path_change() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.jsonl");
        let b = dir.path().join("b.jsonl");
        let sink = JsonlSink::new();
        sink.append(&a, "1\n").unwrap();
        sink.append(&b, "2\n").unwrap();
        assert_eq!(fs::read_to_string(&a).unwrap(), "1\n");
        assert_eq!(fs::read_to_string(&b).unwrap(), "2\n");
    }

    #[test]
    fn test_jsonl_open_failure_is_reported_and_retried() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let sink = JsonlSink::new();
        assert!(sink.append(dir.path(), "x\n").is_err());
        assert!(!sink.is_open());

        let file = dir.path().join("ok.jsonl");
        sink.append(&file, "y\n").unwrap();
        assert!(sink.is_open());
        sink.close();
        assert!(!sink.is_open());
    }
}
