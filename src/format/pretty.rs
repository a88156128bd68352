//! Human-readable, length-capped rendering for the console.

use std::fmt::Write as _;

use chrono::SecondsFormat;

use crate::format::arg::Arg;

/// Cap for pretty JSON and text blobs.
pub const DEFAULT_MAX_PRETTY_BYTES: usize = 4096;
/// Bytes shown in the hex preview of non-UTF-8 buffers.
pub const DEFAULT_MAX_HEX_PREVIEW: usize = 32;
/// Appended once to anything truncated.
pub const ELLIPSIS: &str = "…";

/// Console renderer for [`Arg`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyPrinter {
    /// Byte cap for text, JSON and debug renderings; `0` disables it.
    pub max_bytes: usize,
    /// Bytes shown in a hex preview; `0` shows all of them.
    pub hex_preview: usize,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_PRETTY_BYTES,
            hex_preview: DEFAULT_MAX_HEX_PREVIEW,
        }
    }
}

impl PrettyPrinter {
    pub fn new(max_bytes: usize, hex_preview: usize) -> Self {
        Self { max_bytes, hex_preview }
    }

    pub fn render(&self, arg: &Arg) -> String {
        match arg {
            Arg::Str(s) => s.clone(),
            Arg::Error(msg) => msg.clone(),
            Arg::Time(t) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
            Arg::Display(s) => s.clone(),
            Arg::Bytes(bytes) => self.render_bytes(bytes),
            Arg::Opaque(type_name) => (*type_name).to_string(),
            Arg::Value(v) => match serde_json::to_string_pretty(v) {
                Ok(json) => truncate(&json, self.max_bytes),
                Err(_) => truncate(&format!("{v:#?}"), self.max_bytes),
            },
            Arg::Unserializable { debug, .. } => truncate(debug, self.max_bytes),
        }
    }

    fn render_bytes(&self, bytes: &[u8]) -> String {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return truncate(text, self.max_bytes);
        }

        let shown = match self.hex_preview {
            0 => bytes,
            n => &bytes[..bytes.len().min(n)],
        };
        let mut out = format!("<{} bytes: ", bytes.len());
        for b in shown {
            let _ = write!(out, "{b:02X}");
        }
        if bytes.len() > shown.len() {
            out.push_str(ELLIPSIS);
        }
        out.push('>');
        out
    }
}

/// Keep at most `max` bytes of `s` (cut back to a char boundary) and append
/// [`ELLIPSIS`] when anything was dropped. `max == 0` leaves `s` untouched.
pub fn truncate(s: &str, max: usize) -> String {
    if max == 0 || s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + ELLIPSIS.len());
    out.push_str(&s[..end]);
    out.push_str(ELLIPSIS);
    out
}
