//! Chart colors

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TandemError;

/// Label color on light backgrounds
pub const DARK_TEXT: Color = Color::rgb(0x1F, 0x29, 0x37);
/// Label color on dark backgrounds
pub const LIGHT_TEXT: Color = Color::rgb(0xFF, 0xFF, 0xFF);

/// RGBA color; alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB`
    pub fn hex(s: &str) -> Result<Self, TandemError> {
        let invalid = || TandemError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let rgb = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Self::rgb(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        ))
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Perceived brightness in `0.0..=1.0`
    pub fn luminance(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Text color readable on top of this color
    pub fn contrast_text(self) -> Color {
        if self.luminance() > 0.5 {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let c = Color::hex("#6B8E99").unwrap();
        assert_eq!((c.r, c.g, c.b), (0x6B, 0x8E, 0x99));
        assert_eq!(c.to_css(), "#6B8E99");
    }

    #[test]
    fn test_reject_bad_hex() {
        assert!(Color::hex("6B8E99").is_err());
        assert!(Color::hex("#6B8E9").is_err());
        assert!(Color::hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_contrast_text() {
        // Pale gray-blue topic color gets dark text
        assert_eq!(Color::hex("#BDC9CD").unwrap().contrast_text(), DARK_TEXT);
        // Deep teal gets white text
        assert_eq!(Color::hex("#2D4A54").unwrap().contrast_text(), LIGHT_TEXT);
        // Mid teal sits just above the threshold
        assert_eq!(Color::hex("#6B8E99").unwrap().contrast_text(), DARK_TEXT);
        assert_eq!(Color::hex("#5E7B84").unwrap().contrast_text(), LIGHT_TEXT);
    }

    #[test]
    fn test_rgba_css() {
        let c = Color::rgb(107, 142, 153).with_alpha(0.2);
        assert_eq!(c.to_css(), "rgba(107, 142, 153, 0.2)");
    }
}
