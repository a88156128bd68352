//! Leveled logger core.
//!
//! # Data Flow
//! ```text
//! emit(level, colorizer, format, args)
//!     ├→ record.rs (sanitized LogLine) → sink.rs JsonlSink   [always, if path set]
//!     └→ pretty + printf (colorized)   → sink.rs ConsoleSink [if level permits]
//! ```
//!
//! # Design Decisions
//! - Synchronous: returns once both writes completed or were abandoned
//! - Config is read through `ArcSwap`, so reconfiguration never tears
//! - Nothing in the emit path returns an error to the caller

pub mod emitter;
pub mod level;
pub mod record;
pub mod sink;
pub mod thread_id;

pub use emitter::Logger;
pub use level::{Level, ParseLevelError};
pub use record::LogLine;

/// Emit through a [`Logger`], converting each argument with `Arg::from`.
///
/// ```
/// use hue_log::{emit, Level, Logger, LoggerConfig};
///
/// let logger = Logger::with_console(LoggerConfig::default(), std::io::sink());
/// let red = logger.colorizer("Red");
/// emit!(logger, Level::Info, &red, "error: %s\n%s", "something", "went wrong");
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:expr, $colorizer:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.emit(
            $level,
            $colorizer,
            $format,
            &[$($crate::format::Arg::from($arg)),*],
        )
    };
}
