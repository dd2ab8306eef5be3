use crate::types::{Grid, Segment};

/// Full-length reference grid lines: `cols + 1` verticals, then `rows + 1`
/// horizontals.
pub fn background(grid: &Grid) -> Vec<Segment> {
    let verticals =
        (0..=grid.cols).map(|col| Segment::new(grid.point(col, 0), grid.point(col, grid.rows)));
    let horizontals =
        (0..=grid.rows).map(|row| Segment::new(grid.point(0, row), grid.point(grid.cols, row)));
    verticals.chain(horizontals).collect()
}
