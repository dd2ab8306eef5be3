use crate::types::{Grid, PatternList, Segment};

/// Vertical stitches along each of the `cols + 1` grid lines.
///
/// Column `c` uses pattern `c` of the list, indexed by row. Columns ascend
/// in the outer loop, rows in the inner loop.
pub fn vertical(grid: &Grid, patterns: &PatternList) -> Vec<Segment> {
    let mut segments = Vec::new();
    for col in 0..=grid.cols {
        let pattern = patterns.select(col as usize);
        for row in 0..grid.rows {
            if pattern.bit_at(row as usize) {
                segments.push(Segment::new(grid.point(col, row), grid.point(col, row + 1)));
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_second_column_pattern() {
        let grid = Grid::new(1, 4, 10.0, Point::default());
        let segments = vertical(&grid, &PatternList::parse(["0", "0011"]));
        let coords: Vec<_> = segments.iter().map(|s| s.coords()).collect();
        assert_eq!(
            coords,
            vec![(10.0, 20.0, 10.0, 30.0), (10.0, 30.0, 10.0, 40.0)]
        );
    }

    #[test]
    fn test_columns_outer_rows_inner() {
        let grid = Grid::new(1, 2, 1.0, Point::default());
        let segments = vertical(&grid, &PatternList::parse(["1"]));
        let starts: Vec<_> = segments.iter().map(|s| (s.start.x, s.start.y)).collect();
        assert_eq!(starts, vec![(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
    }
}
