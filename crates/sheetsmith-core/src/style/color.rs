//! Color representation

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A fill color.
///
/// Spreadsheet files store colors as 8-digit ARGB hex; plain RGB input is
/// treated as fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    /// Black, the color of drawn borders
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Yellow, the usual highlight color
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "FFFF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb { r, g, b })
            }
            8 => {
                let a = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let r = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let g = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let b = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Color::Argb { a, r, g, b })
            }
            _ => None,
        }
    }

    /// Convert to ARGB hex string (8 characters, used by XLSX)
    pub fn to_argb_hex(&self) -> String {
        match self {
            Color::Rgb { r, g, b } => format!("FF{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        }
    }

    /// Opaque RGB form, so `FF0000` and `FFFF0000` compare equal
    pub fn normalized(&self) -> Self {
        match *self {
            Color::Argb { a: 0xFF, r, g, b } => Color::Rgb { r, g, b },
            other => other,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_argb_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s).ok_or_else(|| Error::invalid(format!("invalid color '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("FFFF00"), Some(Color::YELLOW));
        assert_eq!(Color::from_hex("#00ff00"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(
            Color::from_hex("80FF0000"),
            Some(Color::argb(0x80, 255, 0, 0))
        );
        assert_eq!(Color::from_hex("FFF"), None);
        assert_eq!(Color::from_hex("GGGGGG"), None);
    }

    #[test]
    fn test_to_argb_hex() {
        assert_eq!(Color::YELLOW.to_argb_hex(), "FFFFFF00");
        assert_eq!(Color::BLACK.to_argb_hex(), "FF000000");
        assert_eq!(Color::argb(0x80, 1, 2, 3).to_argb_hex(), "80010203");
    }

    #[test]
    fn test_normalized() {
        let opaque: Color = "FFFF0000".parse().unwrap();
        assert_eq!(opaque.normalized(), Color::rgb(255, 0, 0));
        assert!("nope".parse::<Color>().is_err());
    }
}
