//! Color parsing for titlebar schemes

use anyhow::{bail, Context, Result};
use std::fmt;

use crate::constants::text_colors;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `RRGGBB` with an optional leading '#'
    pub fn parse(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            bail!("Invalid color {hex:?}: expected 6 hex digits, got {}", digits.len());
        }
        // Checked up front so the byte slicing below stays on char boundaries
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("Invalid color {hex:?}: contains non-hex characters");
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("Failed to parse color channel in {hex:?}"))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Comma-joined decimal form used by KDE color schemes (`26,43,60`)
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

/// Titlebar text colors for active and inactive windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPalette {
    pub active: &'static str,
    pub inactive: &'static str,
}

impl TextPalette {
    /// Light text for dark titlebars, dark text otherwise
    pub fn for_background(dark: bool) -> Self {
        if dark {
            Self {
                active: text_colors::DARK_ACTIVE,
                inactive: text_colors::DARK_INACTIVE,
            }
        } else {
            Self {
                active: text_colors::LIGHT_ACTIVE,
                inactive: text_colors::LIGHT_INACTIVE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Rgb::parse("#1a2b3c").unwrap(), Rgb::new(26, 43, 60));
        assert_eq!(Rgb::parse("1a2b3c").unwrap(), Rgb::new(26, 43, 60));
        assert_eq!(Rgb::parse("#1F2229").unwrap(), Rgb::new(31, 34, 41));
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(Rgb::parse("#000000").unwrap(), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::parse("#FFFFFF").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(Rgb::parse("#fff").is_err());
        assert!(Rgb::parse("#1a2b3c4d").is_err());
        assert!(Rgb::parse("").is_err());
        assert!(Rgb::parse("#").is_err());
    }

    #[test]
    fn test_parse_non_hex() {
        assert!(Rgb::parse("#zzzzzz").is_err());
        assert!(Rgb::parse("#+1+2+3").is_err());
        // Six bytes but not six chars
        assert!(Rgb::parse("#ééé").is_err());
    }

    #[test]
    fn test_only_one_hash_stripped() {
        assert!(Rgb::parse("##1a2b3c").is_err());
    }

    #[test]
    fn test_display_is_comma_joined_decimal() {
        assert_eq!(Rgb::new(26, 43, 60).to_string(), "26,43,60");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "0,0,0");
    }

    #[test]
    fn test_text_palette_selection() {
        let dark = TextPalette::for_background(true);
        assert_eq!(dark.active, "222,222,222");
        assert_eq!(dark.inactive, "120,120,120");

        let light = TextPalette::for_background(false);
        assert_eq!(light.active, "40,40,40");
        assert_eq!(light.inactive, "100,100,100");
    }
}
