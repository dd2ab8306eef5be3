//! Line families: the four stitch directions plus the reference grid.
//!
//! Every generator is pure: it walks the grid, asks the pattern list which
//! cells are on, and returns the segments in a fixed order.

mod background;
mod diagonal;
mod horizontal;
mod vertical;

pub use background::background;
pub use diagonal::{ne_diagonal, nw_diagonal};
pub use horizontal::horizontal;
pub use vertical::vertical;

use crate::types::{Grid, PatternList, Segment};
use std::fmt;

/// One of the four stitch directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Horizontal,
    Vertical,
    /// Rising diagonals, lower-left to upper-right
    NeDiagonal,
    /// Falling diagonals, lower-right to upper-left
    NwDiagonal,
}

impl Family {
    /// Order in which families are layered on the canvas
    pub const DRAW_ORDER: [Family; 4] = [
        Family::Horizontal,
        Family::Vertical,
        Family::NwDiagonal,
        Family::NeDiagonal,
    ];

    /// Generate this family's segments for `grid`
    pub fn generate(self, grid: &Grid, patterns: &PatternList) -> Vec<Segment> {
        let segments = match self {
            Family::Horizontal => horizontal(grid, patterns),
            Family::Vertical => vertical(grid, patterns),
            Family::NeDiagonal => ne_diagonal(grid, patterns),
            Family::NwDiagonal => nw_diagonal(grid, patterns),
        };
        log::debug!("{} family: {} segments", self, segments.len());
        segments
    }

    pub fn name(&self) -> &'static str {
        match self {
            Family::Horizontal => "horizontal",
            Family::Vertical => "vertical",
            Family::NeDiagonal => "ne-diagonal",
            Family::NwDiagonal => "nw-diagonal",
        }
    }

    /// Field name of this family in a render configuration
    pub fn config_key(&self) -> &'static str {
        match self {
            Family::Horizontal => "horizontal",
            Family::Vertical => "vertical",
            Family::NeDiagonal => "ne_diagonal",
            Family::NwDiagonal => "nw_diagonal",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
