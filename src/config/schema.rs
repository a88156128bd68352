//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::color::{ColorError, Colorizer, Rgb};
use crate::format::pretty::{DEFAULT_MAX_HEX_PREVIEW, DEFAULT_MAX_PRETTY_BYTES};
use crate::logger::Level;

/// Root configuration for a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Most verbose level shown on the console.
    pub level: Level,

    /// Include the thread id in console lines and records.
    pub use_tid: bool,

    /// chrono strftime pattern for console timestamps; empty disables them.
    pub time_format: String,

    /// Colorizer name applied to the timestamp.
    pub time_color: String,

    /// JSON Lines file mirroring every call; empty disables persistence.
    pub file_path: String,

    /// Console stream.
    pub console: ConsoleTarget,

    /// Byte cap for pretty-printed arguments (0 = unlimited).
    pub max_pretty_bytes: usize,

    /// Bytes shown in hex previews of binary arguments (0 = unlimited).
    pub max_hex_preview: usize,

    /// Extra colorizers registered when the config is applied.
    pub colorizers: Vec<ColorizerConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            use_tid: false,
            time_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            time_color: "GrayDim".to_string(),
            file_path: String::new(),
            console: ConsoleTarget::Stderr,
            max_pretty_bytes: DEFAULT_MAX_PRETTY_BYTES,
            max_hex_preview: DEFAULT_MAX_HEX_PREVIEW,
            colorizers: Vec::new(),
        }
    }
}

/// Console stream selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
}

/// A colorizer defined in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorizerConfig {
    /// Registry name (overwrites a built-in of the same name).
    pub name: String,

    /// Foreground: `#rrggbb` or a palette name.
    pub fg: String,

    /// Optional background, same notation as `fg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,

    #[serde(default)]
    pub bold: bool,
}

impl ColorizerConfig {
    pub fn build(&self) -> Result<Colorizer, ColorError> {
        let fg: Rgb = self.fg.parse()?;
        match &self.bg {
            Some(bg) => Ok(Colorizer::fg_bg(&self.name, fg, bg.parse()?, self.bold)),
            None => Ok(Colorizer::fg(&self.name, fg, self.bold)),
        }
    }
}
