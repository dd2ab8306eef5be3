use crate::types::{Grid, PatternList, Segment};

/// Horizontal stitches along each of the `rows + 1` grid lines.
///
/// Row `r` uses pattern `r` of the list, indexed by column. Rows ascend in
/// the outer loop, columns in the inner loop.
pub fn horizontal(grid: &Grid, patterns: &PatternList) -> Vec<Segment> {
    let mut segments = Vec::new();
    for row in 0..=grid.rows {
        let pattern = patterns.select(row as usize);
        for col in 0..grid.cols {
            if pattern.bit_at(col as usize) {
                segments.push(Segment::new(grid.point(col, row), grid.point(col + 1, row)));
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
    fn test_second_row_pattern() {
        let grid = Grid::new(4, 1, 10.0, Point::default());
        let segments = horizontal(&grid, &PatternList::parse(["0", "0011"]));
        let coords: Vec<_> = segments.iter().map(|s| s.coords()).collect();
        assert_eq!(
            coords,
            vec![(20.0, 10.0, 30.0, 10.0), (30.0, 10.0, 40.0, 10.0)]
        );
    }

    #[test]
    fn test_empty_list_draws_nothing() {
        let grid = Grid::new(5, 5, 1.0, Point::default());
        assert!(horizontal(&grid, &PatternList::default()).is_empty());
    }
}
