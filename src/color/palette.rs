//! Named base colors and their derived bright/dim families.
//!
//! Bright variants move each channel 40% toward white, dim variants keep
//! 60% of each channel. All values are compile-time constants.

use crate::color::rgb::Rgb;

const BRIGHT_TINT: u16 = 40;
const DIM_SHADE: u16 = 60;

pub const RED: Rgb = Rgb::new(230, 57, 70);
pub const ORANGE: Rgb = Rgb::new(245, 130, 32);
pub const YELLOW: Rgb = Rgb::new(240, 200, 40);
pub const GREEN: Rgb = Rgb::new(60, 180, 90);
pub const CYAN: Rgb = Rgb::new(30, 190, 200);
pub const BLUE: Rgb = Rgb::new(50, 110, 230);
pub const PURPLE: Rgb = Rgb::new(150, 80, 210);
pub const GRAY: Rgb = Rgb::new(128, 128, 128);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

pub const BRIGHT_RED: Rgb = RED.tint(BRIGHT_TINT);
pub const BRIGHT_ORANGE: Rgb = ORANGE.tint(BRIGHT_TINT);
pub const BRIGHT_YELLOW: Rgb = YELLOW.tint(BRIGHT_TINT);
pub const BRIGHT_GREEN: Rgb = GREEN.tint(BRIGHT_TINT);
pub const BRIGHT_CYAN: Rgb = CYAN.tint(BRIGHT_TINT);
pub const BRIGHT_BLUE: Rgb = BLUE.tint(BRIGHT_TINT);
pub const BRIGHT_PURPLE: Rgb = PURPLE.tint(BRIGHT_TINT);
pub const BRIGHT_GRAY: Rgb = GRAY.tint(BRIGHT_TINT);

pub const DIM_RED: Rgb = RED.shade(DIM_SHADE);
pub const DIM_ORANGE: Rgb = ORANGE.shade(DIM_SHADE);
pub const DIM_YELLOW: Rgb = YELLOW.shade(DIM_SHADE);
pub const DIM_GREEN: Rgb = GREEN.shade(DIM_SHADE);
pub const DIM_CYAN: Rgb = CYAN.shade(DIM_SHADE);
pub const DIM_BLUE: Rgb = BLUE.shade(DIM_SHADE);
pub const DIM_PURPLE: Rgb = PURPLE.shade(DIM_SHADE);
pub const DIM_GRAY: Rgb = GRAY.shade(DIM_SHADE);

/// A hue with its three intensities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hue {
    pub name: &'static str,
    pub base: Rgb,
    pub bright: Rgb,
    pub dim: Rgb,
}

/// Every hue that has bright and dim variants, in display order.
pub const HUES: [Hue; 8] = [
    Hue { name: "Red", base: RED, bright: BRIGHT_RED, dim: DIM_RED },
    Hue { name: "Orange", base: ORANGE, bright: BRIGHT_ORANGE, dim: DIM_ORANGE },
    Hue { name: "Yellow", base: YELLOW, bright: BRIGHT_YELLOW, dim: DIM_YELLOW },
    Hue { name: "Green", base: GREEN, bright: BRIGHT_GREEN, dim: DIM_GREEN },
    Hue { name: "Cyan", base: CYAN, bright: BRIGHT_CYAN, dim: DIM_CYAN },
    Hue { name: "Blue", base: BLUE, bright: BRIGHT_BLUE, dim: DIM_BLUE },
    Hue { name: "Purple", base: PURPLE, bright: BRIGHT_PURPLE, dim: DIM_PURPLE },
    Hue { name: "Gray", base: GRAY, bright: BRIGHT_GRAY, dim: DIM_GRAY },
];

/// Resolve a color name such as `red`, `BrightRed`, `RedBright`, `dim-gray`
/// or `black`. Matching ignores case, `-`, `_` and spaces.
pub fn lookup(name: &str) -> Option<Rgb> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect();

    if key == "black" {
        return Some(BLACK);
    }

    HUES.iter().find_map(|hue| {
        let hue_key = hue.name.to_ascii_lowercase();
        if key == hue_key {
            return Some(hue.base);
        }
        let variant = key
            .strip_prefix(hue_key.as_str())
            .or_else(|| key.strip_suffix(hue_key.as_str()))?;
        match variant {
            "bright" => Some(hue.bright),
            "dim" => Some(hue.dim),
            _ => None,
        }
    })
}
