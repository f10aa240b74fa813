//! RGBA color type used by cell styles.
//!
//! This module provides the [`Rgba`] type, which represents colors using
//! floating-point RGBA components, plus the parsing used by the markup
//! language (`foreground="red"`, `background="#1a1a2e"`).
//!
//! # Examples
//!
//! ```
//! use celltype::Rgba;
//!
//! let red = Rgba::RED;
//! let custom = Rgba::from_hex("#1a1a2e").unwrap();
//! assert_eq!(Rgba::parse("red"), Some(red));
//! assert_eq!(custom.to_rgb_u8(), (0x1a, 0x1a, 0x2e));
//! ```

use std::fmt;

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match hex.len() {
            3 => {
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Some(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb_u8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Self::from_rgba_u8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => None,
        }
    }

    /// Look up one of the standard terminal color names.
    ///
    /// Base names map to the bright palette entries (`"red"` is `#FF0000`);
    /// `dark-` prefixed names map to the dim half of the 16-color palette.
    /// Matching ignores ASCII case, and `_` or a space may replace the `-`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let (r, g, b) = match name.as_str() {
            "black" => (0, 0, 0),
            "dark-red" | "maroon" => (128, 0, 0),
            "dark-green" => (0, 128, 0),
            "dark-yellow" | "olive" => (128, 128, 0),
            "dark-blue" | "navy" => (0, 0, 128),
            "dark-magenta" | "purple" => (128, 0, 128),
            "dark-cyan" | "teal" => (0, 128, 128),
            "silver" | "light-gray" | "light-grey" => (192, 192, 192),
            "gray" | "grey" | "dark-gray" | "dark-grey" => (128, 128, 128),
            "red" => (255, 0, 0),
            "green" | "lime" => (0, 255, 0),
            "yellow" => (255, 255, 0),
            "blue" => (0, 0, 255),
            "magenta" | "fuchsia" => (255, 0, 255),
            "cyan" | "aqua" => (0, 255, 255),
            "white" => (255, 255, 255),
            _ => return None,
        };
        Some(Self::from_rgb_u8(r, g, b))
    }

    /// Parse either a hex color (must start with `#`) or a color name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::from_hex(value)
        } else {
            Self::from_name(value)
        }
    }

    /// Convert to u8 RGB tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to u8 RGBA tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgba_u8(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb_u8();
        let a = (self.a * 255.0).round().clamp(0.0, 255.0) as u8;
        (r, g, b, a)
    }
}

impl fmt::Display for Rgba {
    #[allow(clippy::many_single_char_names)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_rgba_u8();
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgba::from_hex("#FF0000"), Some(Rgba::RED));
        assert_eq!(Rgba::from_hex("00FF00"), Some(Rgba::GREEN));
        assert_eq!(Rgba::from_hex("#00F"), Some(Rgba::BLUE));
        assert_eq!(Rgba::from_hex("#000000FF"), Some(Rgba::BLACK));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Rgba::from_hex("#GG0000"), None);
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#é12"), None);
        assert_eq!(Rgba::from_hex(""), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Rgba::from_name("red"), Some(Rgba::RED));
        assert_eq!(Rgba::from_name("RED"), Some(Rgba::RED));
        assert_eq!(Rgba::from_name("Dark_Red"), Rgba::from_hex("#800000"));
        assert_eq!(Rgba::from_name("grey"), Rgba::from_name("gray"));
        assert_eq!(Rgba::from_name("chartreuse-ish"), None);
    }

    #[test]
    fn test_parse_dispatches_on_hash() {
        assert_eq!(Rgba::parse(" #fff "), Some(Rgba::WHITE));
        assert_eq!(Rgba::parse("cyan"), Some(Rgba::CYAN));
        assert_eq!(Rgba::parse("fff"), None);
    }

    #[test]
    fn test_display_round_trips_through_hex() {
        let color = Rgba::from_rgb_u8(0x12, 0xAB, 0x7F);
        assert_eq!(color.to_string(), "#12AB7F");
        assert_eq!(Rgba::from_hex(&color.to_string()), Some(color));
        assert_eq!(Rgba::from_rgba_u8(255, 0, 0, 0).to_string(), "#FF000000");
    }
}
