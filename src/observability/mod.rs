//! Self-diagnostics of the logger.
//!
//! # Data Flow
//! ```text
//! config loads, reloads, swallowed sink failures
//!     → tracing events (library side, no subscriber required)
//!     → logging.rs subscriber (binaries only, filtered via RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber itself
//! - Swallowed emit failures are reported at debug level only

pub mod logging;
