//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White. Shapes coloured white are background plates.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fill used for specifications drawn before any recolouring.
    pub const DEFAULT_ICON: Self = Self::rgb(0x44, 0x44, 0x44);

    /// Parse a colour from a hex string or a CSS colour name.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        if let Some(named) = palette::named::from_str(&s.to_ascii_lowercase()) {
            return Ok(Self::rgb(named.red, named.green, named.blue));
        }

        Self::from_hex(s).map_err(|_| IconError::Parse {
            message: format!("Unknown colour: {}", s),
            help: Some("Use a CSS colour name or #RRGGBB".to_string()),
        })
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let digits = hex
                    .chars()
                    .map(parse_hex_digit)
                    .collect::<Result<Vec<u8>>>()?;
                let a = digits.get(3).map_or(255, |&d| d << 4 | d);
                Ok(Self::new(
                    digits[0] << 4 | digits[0],
                    digits[1] << 4 | digits[1],
                    digits[2] << 4 | digits[2],
                    a,
                ))
            }
            6 => Ok(Self::rgb(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            )),
            8 => Ok(Self::new(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
                parse_hex_byte(&hex[6..8])?,
            )),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Whether the colour is light enough that a dark outline reads better.
    pub fn is_bright(self) -> bool {
        let luma = 0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64;
        luma > 200.0
    }

    /// Colour to draw beneath a shape of this colour.
    pub fn outline(self) -> Self {
        if self.is_bright() {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

fn invalid_hex(s: &str) -> IconError {
    IconError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

impl FromStr for Colour {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = IconError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| IconError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| IconError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_short_forms() {
        assert_eq!(Colour::from_hex("#ABC").unwrap(), Colour::rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(Colour::from_hex("#F008").unwrap(), Colour::new(255, 0, 0, 0x88));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Colour::parse("white").unwrap(), Colour::WHITE);
        assert_eq!(Colour::parse("Black").unwrap(), Colour::BLACK);
        assert_eq!(Colour::parse("red").unwrap(), Colour::rgb(255, 0, 0));
        assert!(Colour::parse("not-a-colour").is_err());
    }

    #[test]
    fn test_parse_bare_hex() {
        assert_eq!(Colour::parse("444444").unwrap(), Colour::DEFAULT_ICON);
    }

    #[test]
    fn test_brightness_and_outline() {
        assert!(Colour::WHITE.is_bright());
        assert!(!Colour::BLACK.is_bright());
        assert!(!Colour::DEFAULT_ICON.is_bright());
        assert_eq!(Colour::WHITE.outline(), Colour::BLACK);
        assert_eq!(Colour::DEFAULT_ICON.outline(), Colour::WHITE);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_serde_string_form() {
        let c: Colour = serde_yaml::from_str("\"#0000FF\"").unwrap();
        assert_eq!(c, Colour::rgb(0, 0, 255));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#0000FF\"");
    }
}
