//! Named text transforms.

use std::fmt;
use std::sync::Arc;

use crate::color::ansi::Style;
use crate::color::rgb::Rgb;

/// Name of the identity colorizer.
pub const NO_COLOR: &str = "NoColor";

/// Caller-supplied transform.
pub type TransformFn = dyn Fn(&str) -> String + Send + Sync;

/// How a colorizer rewrites text.
#[derive(Clone)]
pub enum Transform {
    /// Built-in per-line SGR styling.
    Style(Style),
    /// Arbitrary function registered at runtime.
    Custom(Arc<TransformFn>),
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Style(style) => f.debug_tuple("Style").field(style).finish(),
            Transform::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A named, optional text transform. Without a transform, [`Colorizer::apply`]
/// returns its input unchanged.
#[derive(Debug, Clone)]
pub struct Colorizer {
    name: String,
    transform: Option<Transform>,
}

impl Colorizer {
    /// Foreground-only, per line.
    pub fn fg(name: impl Into<String>, fg: Rgb, bold: bool) -> Self {
        Self::styled(name, Style::fg(fg, bold))
    }

    /// Foreground on background, per line.
    pub fn fg_bg(name: impl Into<String>, fg: Rgb, bg: Rgb, bold: bool) -> Self {
        Self::styled(name, Style::fg_bg(fg, bg, bold))
    }

    pub fn styled(name: impl Into<String>, style: Style) -> Self {
        Self {
            name: name.into(),
            transform: Some(Transform::Style(style)),
        }
    }

    pub fn custom<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            transform: Some(Transform::Custom(Arc::new(f))),
        }
    }

    /// A named colorizer with no transform.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: None,
        }
    }

    /// The `NoColor` sentinel.
    pub fn none() -> Self {
        Self::plain(NO_COLOR)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn is_identity(&self) -> bool {
        self.transform.is_none()
    }

    pub fn apply(&self, text: &str) -> String {
        match &self.transform {
            None => text.to_string(),
            Some(Transform::Style(style)) => style.paint_lines(text),
            Some(Transform::Custom(f)) => f(text),
        }
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::none()
    }
}
