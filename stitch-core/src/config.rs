//! Render configuration
//!
//! A single immutable value passed into [`crate::render`]. With the `serde`
//! feature it loads from JSON where every field is optional and falls back
//! to the defaults below.

use crate::families::Family;
use crate::types::{Color, Grid, PatternList};
#[cfg(feature = "serde")]
use crate::types::Pattern;
use anyhow::{bail, Result};
#[cfg(feature = "serde")]
use anyhow::Context;
#[cfg(feature = "serde")]
use std::path::Path;

const STITCH_COLOR: Color = Color::rgb(0x0e, 0x29, 0x64);
const GRID_COLOR: Color = Color::rgb(0xd0, 0xd0, 0xd0);
const STITCH_THICKNESS: f64 = 5.0;

/// Grid size in cells, and cell size in drawing units
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GridConfig {
    pub cols: i64,
    pub rows: i64,
    pub cell: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 30,
            rows: 30,
            cell: 12.0,
        }
    }
}

/// Style and patterns for one line family
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FamilyConfig {
    pub color: Color,
    pub thickness: f64,
    pub patterns: PatternList,
}

impl FamilyConfig {
    pub fn new(patterns: PatternList) -> Self {
        Self {
            patterns,
            ..Self::default()
        }
    }
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            color: STITCH_COLOR,
            thickness: STITCH_THICKNESS,
            patterns: PatternList::default(),
        }
    }
}

/// The optional reference grid drawn underneath the stitches
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BackgroundConfig {
    pub enabled: bool,
    pub color: Color,
    pub thickness: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: GRID_COLOR,
            thickness: 1.0,
        }
    }
}

/// Everything a render pass needs
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RenderConfig {
    pub grid: GridConfig,
    pub horizontal: FamilyConfig,
    pub vertical: FamilyConfig,
    pub ne_diagonal: FamilyConfig,
    pub nw_diagonal: FamilyConfig,
    pub background: BackgroundConfig,
    /// Skip incremental redraws; only the finished drawing is shown
    pub no_animation: bool,
    /// Reject pattern characters other than '0' and '1' when loading
    pub strict_patterns: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            horizontal: FamilyConfig::new(PatternList::parse(["0101", "1010"])),
            vertical: FamilyConfig::new(PatternList::parse(["0011", "1100"])),
            ne_diagonal: FamilyConfig::default(),
            nw_diagonal: FamilyConfig::default(),
            background: BackgroundConfig::default(),
            no_animation: false,
            strict_patterns: false,
        }
    }
}

impl RenderConfig {
    /// A grid with every family switched off
    pub fn blank(cols: i64, rows: i64, cell: f64) -> Self {
        Self {
            grid: GridConfig { cols, rows, cell },
            horizontal: FamilyConfig::default(),
            vertical: FamilyConfig::default(),
            ..Self::default()
        }
    }

    /// Replace one family's patterns
    pub fn with_patterns(mut self, family: Family, patterns: PatternList) -> Self {
        self.family_mut(family).patterns = patterns;
        self
    }

    /// The grid, centered on the drawing-plane origin
    pub fn grid(&self) -> Grid {
        Grid::centered(self.grid.cols, self.grid.rows, self.grid.cell)
    }

    pub fn family(&self, family: Family) -> &FamilyConfig {
        match family {
            Family::Horizontal => &self.horizontal,
            Family::Vertical => &self.vertical,
            Family::NeDiagonal => &self.ne_diagonal,
            Family::NwDiagonal => &self.nw_diagonal,
        }
    }

    pub fn family_mut(&mut self, family: Family) -> &mut FamilyConfig {
        match family {
            Family::Horizontal => &mut self.horizontal,
            Family::Vertical => &mut self.vertical,
            Family::NeDiagonal => &mut self.ne_diagonal,
            Family::NwDiagonal => &mut self.nw_diagonal,
        }
    }

    /// Check the numeric fields; patterns and colors are valid by construction
    pub fn validate(&self) -> Result<()> {
        if !self.grid.cell.is_finite() || self.grid.cell <= 0.0 {
            bail!("grid.cell must be a positive number, got {}", self.grid.cell);
        }
        for family in Family::DRAW_ORDER {
            let thickness = self.family(family).thickness;
            if !thickness.is_finite() || thickness < 0.0 {
                bail!(
                    "{}.thickness must be zero or positive, got {}",
                    family.config_key(),
                    thickness
                );
            }
        }
        if !self.background.thickness.is_finite() || self.background.thickness < 0.0 {
            bail!(
                "background.thickness must be zero or positive, got {}",
                self.background.thickness
            );
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl RenderConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("configuration is not valid JSON")?;

        let strict = value
            .get("strict_patterns")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if strict {
            check_patterns_strict(&value)?;
        }

        let config: RenderConfig =
            serde_json::from_value(value).context("invalid render configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run strict pattern parsing over the raw pattern strings of every family
#[cfg(feature = "serde")]
fn check_patterns_strict(value: &serde_json::Value) -> Result<()> {
    for family in Family::DRAW_ORDER {
        let key = family.config_key();
        let Some(patterns) = value
            .get(key)
            .and_then(|f| f.get("patterns"))
            .and_then(|p| p.as_array())
        else {
            continue;
        };
        for (i, entry) in patterns.iter().enumerate() {
            let Some(source) = entry.as_str() else {
                bail!("{}.patterns: pattern #{} is not a string", key, i);
            };
            Pattern::parse_strict(source)
                .with_context(|| format!("pattern #{}", i))
                .with_context(|| format!("{}.patterns", key))?;
        }
    }
    Ok(())
}
