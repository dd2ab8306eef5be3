//! RGB colors parsed from hex notation

use anyhow::{anyhow, bail, Result};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading '#' is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("invalid color {:?}: expected #rrggbb or #rgb", hex);
        }
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => bail!("invalid color {:?}: expected #rrggbb or #rgb", hex),
        };
        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| anyhow!("invalid color {:?}: bad hex digits", hex))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Paint `text` in this color for truecolor terminals
    #[cfg(feature = "colored")]
    pub fn paint(&self, text: &str) -> colored::ColoredString {
        use colored::Colorize;
        text.truecolor(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short() {
        assert_eq!(Color::from_hex("#0e2964").unwrap(), Color::rgb(0x0e, 0x29, 0x64));
        assert_eq!(Color::from_hex("d0d0d0").unwrap(), Color::rgb(0xd0, 0xd0, 0xd0));
        assert_eq!(Color::from_hex("#f0a").unwrap(), Color::rgb(0xff, 0x00, 0xaa));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!("navy".parse::<Color>().is_err());
        assert!(Color::from_hex("+1+2+3").is_err());
        assert!(Color::from_hex("#+ff").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let c: Color = "#0E2964".parse().unwrap();
        assert_eq!(c.to_string(), "#0e2964");
    }
}
