//! Persisted log records (one JSON object per line).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::strip_ansi;
use crate::format::{sanitize_all, Arg};
use crate::logger::level::Level;

/// A single JSONL record. `format` and `args` never contain ANSI escapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogLine {
    pub time: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<u64>,

    pub level: Level,

    /// Name of the colorizer used on the console, not its escape codes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,

    pub format: String,

    #[serde(default)]
    pub args: Vec<Value>,
}

impl LogLine {
    pub fn new(
        time: DateTime<Utc>,
        tid: Option<u64>,
        level: Level,
        color: &str,
        format: &str,
        args: &[Arg],
    ) -> Self {
        Self {
            time,
            tid,
            level,
            color: color.to_string(),
            format: strip_ansi(format),
            args: sanitize_all(args),
        }
    }

    /// Serialize as one line, newline included.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
