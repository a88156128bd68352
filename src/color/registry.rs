//! Process-wide lookup of colorizers by name.
//!
//! # Design Decisions
//! - Backed by `DashMap` so registration may race with lookups
//! - Last registration under a name wins
//! - Unknown names resolve to `NoColor` rather than failing

use dashmap::DashMap;

use crate::color::colorizer::{Colorizer, NO_COLOR};
use crate::color::palette::{BLACK, HUES};
use crate::color::rgb::Rgb;

/// Named colorizers, pre-populated with the default set.
#[derive(Debug)]
pub struct ColorizerRegistry {
    entries: DashMap<String, Colorizer>,
}

impl ColorizerRegistry {
    /// An empty registry (apart from `NoColor`).
    pub fn empty() -> Self {
        let entries = DashMap::new();
        entries.insert(NO_COLOR.to_string(), Colorizer::none());
        Self { entries }
    }

    /// Registry holding every default colorizer: each hue in base, bright and
    /// dim intensity, regular and bold, plus black-on-hue backgrounds.
    pub fn with_defaults() -> Self {
        let registry = Self::empty();
        for hue in HUES {
            let variants = [
                (String::new(), hue.base),
                ("Bright".to_string(), hue.bright),
                ("Dim".to_string(), hue.dim),
            ];
            for (suffix, rgb) in variants {
                registry.register_fg(format!("{}{suffix}", hue.name), rgb, false);
                registry.register_fg(format!("{}{suffix}Bold", hue.name), rgb, true);
            }
            registry.register_fg_bg(format!("{}Background", hue.name), BLACK, hue.base, false);
            registry.register_fg_bg(format!("{}BoldBackground", hue.name), BLACK, hue.base, true);
        }
        registry
    }

    /// Insert or overwrite a colorizer under `name` built from `f`.
    pub fn register<F>(&self, name: &str, f: F) -> Colorizer
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.register_colorizer(Colorizer::custom(name, f))
    }

    pub fn register_fg(&self, name: impl Into<String>, fg: Rgb, bold: bool) -> Colorizer {
        self.register_colorizer(Colorizer::fg(name, fg, bold))
    }

    pub fn register_fg_bg(
        &self,
        name: impl Into<String>,
        fg: Rgb,
        bg: Rgb,
        bold: bool,
    ) -> Colorizer {
        self.register_colorizer(Colorizer::fg_bg(name, fg, bg, bold))
    }

    /// Insert or overwrite `colorizer` under its own name.
    pub fn register_colorizer(&self, colorizer: Colorizer) -> Colorizer {
        self.entries
            .insert(colorizer.name().to_string(), colorizer.clone());
        colorizer
    }

    pub fn get(&self, name: &str) -> Option<Colorizer> {
        self.entries.get(name).map(|entry| entry.value().clone())
    }

    /// Like [`get`](Self::get), falling back to `NoColor`.
    pub fn resolve(&self, name: &str) -> Colorizer {
        self.get(name).unwrap_or_else(Colorizer::none)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Sorted registered names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ColorizerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
