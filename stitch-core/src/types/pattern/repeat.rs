//! Core Pattern struct and implementation.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// Characters in `source` that are neither '0' nor '1', with their positions.
fn malformed_chars(source: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    source
        .chars()
        .enumerate()
        .filter(|(_, c)| *c != '0' && *c != '1')
}

/// A repeating binary pattern
///
/// Semantically a function from index to bit, repeating with a period equal
/// to the pattern length. The empty pattern is "always off".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct Pattern {
    /// One cycle of the pattern, `true` = stitch on
    bits: Vec<bool>,
}

impl Pattern {
    /// The always-off pattern (`""` or `"0"`)
    pub const fn off() -> Self {
        Pattern { bits: Vec::new() }
    }

    /// The always-on pattern (`"1"`)
    pub fn on() -> Self {
        Pattern { bits: vec![true] }
    }

    /// Create a pattern from one explicit cycle of bits
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Pattern { bits }
    }

    /// Parse a pattern string, treating every character other than '1' as off.
    ///
    /// `""` and `"0"` are shorthand for always off, `"1"` for always on.
    /// Malformed characters are accepted but logged.
    pub fn parse(source: &str) -> Self {
        match source {
            "" | "0" => Self::off(),
            "1" => Self::on(),
            _ => {
                if let Some((pos, ch)) = malformed_chars(source).next() {
                    log::warn!(
                        "pattern {:?} has non-binary character {:?} at {}; treating it as off",
                        source,
                        ch,
                        pos
                    );
                }
                Pattern {
                    bits: source.chars().map(|c| c == '1').collect(),
                }
            }
        }
    }

    /// Parse a pattern string, rejecting anything other than '0' and '1'
    pub fn parse_strict(source: &str) -> Result<Self> {
        if let Some((pos, ch)) = malformed_chars(source).next() {
            bail!(
                "invalid character {:?} at position {} in pattern {:?} (expected '0' or '1')",
                ch,
                pos,
                source
            );
        }
        Ok(Self::parse(source))
    }

    /// Whether the pattern is on at `index`, wrapping around its cycle
    pub fn bit_at(&self, index: usize) -> bool {
        if self.bits.is_empty() {
            return false;
        }
        self.bits[index % self.bits.len()]
    }

    /// Length of one cycle (1 for the shorthand patterns)
    pub fn period(&self) -> usize {
        self.bits.len().max(1)
    }

    /// One cycle of bits
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// True if no index is ever on
    pub fn is_off(&self) -> bool {
        self.bits.iter().all(|b| !b)
    }

    /// True if every index is on
    pub fn is_on(&self) -> bool {
        !self.bits.is_empty() && self.bits.iter().all(|b| *b)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits.is_empty() {
            return write!(f, "0");
        }
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_strict(s)
    }
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::parse(&source)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.to_string()
    }
}
