//! Argument handling.
//!
//! # Data Flow
//! ```text
//! caller values
//!     → arg.rs (closed Arg enum, chosen at conversion time)
//!     ├→ sanitize.rs (JSON-safe, ANSI-free → file record)
//!     └→ pretty.rs (capped human text → printf.rs, colorized per verb → console)
//! ```
//!
//! # Design Decisions
//! - Same priority order in both consumers: error, stringable, bytes,
//!   opaque, structured
//! - Nothing here can fail; degraded output replaces errors

pub mod arg;
pub mod pretty;
pub mod printf;
pub mod sanitize;

pub use arg::Arg;
pub use pretty::{truncate, PrettyPrinter, ELLIPSIS};
pub use sanitize::{sanitize, sanitize_all, BYTES_KEY};
