//! Leveled, per-line colorized console logging with JSON Lines mirroring.

pub mod color;
pub mod config;
pub mod format;
pub mod logger;
pub mod observability;

pub use color::{Colorizer, ColorizerRegistry, Rgb};
pub use config::schema::LoggerConfig;
pub use format::Arg;
pub use logger::{Level, LogLine, Logger};
