//! Truecolor RGB triples.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::color::palette;

/// A 24-bit color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Errors produced when parsing a color from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// Hex notation with the wrong number of digits.
    #[error("invalid hex color length in {0:?} (expected 6 digits)")]
    HexLength(String),

    /// Hex notation containing a non-hex digit.
    #[error("invalid hex digit in color {0:?}")]
    HexDigit(String),

    /// Neither hex nor a palette name.
    #[error("unknown color name {0:?}")]
    UnknownName(String),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Move every channel `percent`% of the way toward white.
    pub const fn tint(self, percent: u16) -> Self {
        Self {
            r: tint_channel(self.r, percent),
            g: tint_channel(self.g, percent),
            b: tint_channel(self.b, percent),
        }
    }

    /// Scale every channel down to `percent`% of its value.
    pub const fn shade(self, percent: u16) -> Self {
        Self {
            r: shade_channel(self.r, percent),
            g: shade_channel(self.g, percent),
            b: shade_channel(self.b, percent),
        }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 {
            return Err(ColorError::HexLength(text.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorError::HexDigit(text.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const fn tint_channel(c: u8, percent: u16) -> u8 {
    let pct = if percent > 100 { 100 } else { percent };
    let c = c as u16;
    (c + ((255 - c) * pct + 50) / 100) as u8
}

const fn shade_channel(c: u8, percent: u16) -> u8 {
    let pct = if percent > 100 { 100 } else { percent };
    ((c as u16 * pct + 50) / 100) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.r, self.g, self.b)
    }
}

/// Accepts hex notation first, then palette names.
impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        if let Some(rgb) = palette::lookup(trimmed) {
            return Ok(rgb);
        }
        if trimmed.len() == 6 && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(trimmed);
        }
        Err(ColorError::UnknownName(trimmed.to_string()))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("00FF10").unwrap(), Rgb::new(0, 255, 16));
        assert_eq!(
            Rgb::from_hex("#fff"),
            Err(ColorError::HexLength("#fff".into()))
        );
        assert_eq!(
            Rgb::from_hex("#gg0000"),
            Err(ColorError::HexDigit("#gg0000".into()))
        );
    }

    #[test]
    fn test_from_str_prefers_names_over_bare_hex() {
        assert_eq!("red".parse::<Rgb>().unwrap(), palette::RED);
        assert_eq!("#000000".parse::<Rgb>().unwrap(), palette::BLACK);
        assert_eq!("102030".parse::<Rgb>().unwrap(), Rgb::new(0x10, 0x20, 0x30));
        assert!(matches!(
            "mauve".parse::<Rgb>(),
            Err(ColorError::UnknownName(_))
        ));
    }

    #[test]
    fn test_tint_and_shade_bounds() {
        let c = Rgb::new(200, 0, 100);
        assert_eq!(c.tint(0), c);
        assert_eq!(c.tint(100), Rgb::new(255, 255, 255));
        assert_eq!(c.shade(100), c);
        assert_eq!(c.shade(0), Rgb::new(0, 0, 0));
        assert_eq!(c.shade(50), Rgb::new(100, 0, 50));
    }

    #[test]
    fn test_display_is_sgr_triplet() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "1;2;3");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }
}
