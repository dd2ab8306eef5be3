//! PatternList - round-robin assignment of patterns to lines.

use super::repeat::Pattern;
use anyhow::{Context, Result};

static ALWAYS_OFF: Pattern = Pattern::off();

/// An ordered list of patterns handed out round-robin by line index.
/// An empty list assigns the always-off pattern to every line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Option<Vec<Pattern>>", into = "Vec<Pattern>")
)]
pub struct PatternList {
    patterns: Vec<Pattern>,
}

impl PatternList {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Build a list from pattern strings, leniently
    pub fn parse<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        sources
            .into_iter()
            .map(|s| Pattern::parse(s.as_ref()))
            .collect()
    }

    /// Build a list from pattern strings, failing on the first malformed one
    pub fn parse_strict<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        sources
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                Pattern::parse_strict(s.as_ref()).with_context(|| format!("pattern #{}", i))
            })
            .collect()
    }

    /// The pattern assigned to line `index`, wrapping around the list
    pub fn select(&self, index: usize) -> &Pattern {
        if self.patterns.is_empty() {
            return &ALWAYS_OFF;
        }
        &self.patterns[index % self.patterns.len()]
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl FromIterator<Pattern> for PatternList {
    fn from_iter<T: IntoIterator<Item = Pattern>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Pattern>> for PatternList {
    fn from(patterns: Vec<Pattern>) -> Self {
        Self::new(patterns)
    }
}

impl From<Option<Vec<Pattern>>> for PatternList {
    fn from(patterns: Option<Vec<Pattern>>) -> Self {
        Self::new(patterns.unwrap_or_default())
    }
}

impl From<PatternList> for Vec<Pattern> {
    fn from(list: PatternList) -> Self {
        list.patterns
    }
}

impl<'a> IntoIterator for &'a PatternList {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
