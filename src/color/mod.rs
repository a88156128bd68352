//! Colorization subsystem.
//!
//! # Data Flow
//! ```text
//! palette.rs (named Rgb constants, bright/dim families)
//!     → ansi.rs (Style → SGR prefix, per-line wrapping)
//!     → colorizer.rs (named optional transform)
//!     → registry.rs (name → Colorizer, extendable at runtime)
//! ```
//!
//! # Design Decisions
//! - Truecolor SGR only (`38;2` / `48;2`)
//! - Absent transform means identity, never an error
//! - Palette is compile-time constant

pub mod ansi;
pub mod colorizer;
pub mod palette;
pub mod registry;
pub mod rgb;

pub use ansi::{strip_ansi, Style, RESET};
pub use colorizer::{Colorizer, Transform, NO_COLOR};
pub use registry::ColorizerRegistry;
pub use rgb::{ColorError, Rgb};
