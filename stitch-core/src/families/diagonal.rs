//! Diagonal stitch families.
//!
//! Diagonals are enumerated by a starting column on row 0, including
//! starting columns outside the grid so that every cell is reached. Each
//! diagonal takes the next pattern from the list whether or not any of it
//! lands inside the grid, and the pattern is indexed by row.

use crate::types::{Grid, PatternList, Segment};

/// Rising diagonals, from (col, row) to (col + 1, row + 1).
///
/// Starting columns run from `-cols` to `cols` ascending; the part of a
/// diagonal left of the grid is clipped.
pub fn ne_diagonal(grid: &Grid, patterns: &PatternList) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (diag_index, start_col) in (-grid.cols..=grid.cols).enumerate() {
        let pattern = patterns.select(diag_index);

        let mut col = start_col;
        let mut row = 0;
        while col < grid.cols && row < grid.rows {
            if pattern.bit_at(row as usize) && row >= 0 && col >= 0 {
                segments.push(Segment::new(
                    grid.point(col, row),
                    grid.point(col + 1, row + 1),
                ));
            }
            col += 1;
            row += 1;
        }
    }
    segments
}

/// Falling diagonals, from (col, row) to (col - 1, row + 1).
///
/// Starting columns run from `2 * cols - 1` down to `1 - cols`; the part
/// of a diagonal right of the grid is clipped.
pub fn nw_diagonal(grid: &Grid, patterns: &PatternList) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (diag_index, start_col) in (1 - grid.cols..=2 * grid.cols - 1).rev().enumerate() {
        let pattern = patterns.select(diag_index);

        let mut col = start_col;
        let mut row = 0;
        while col > 0 && row < grid.rows {
            if pattern.bit_at(row as usize) && row >= 0 && col <= grid.cols {
                segments.push(Segment::new(
                    grid.point(col, row),
                    grid.point(col - 1, row + 1),
                ));
            }
            col -= 1;
            row += 1;
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn in_bounds(grid: &Grid, s: &Segment) -> bool {
        let (x1, y1, x2, y2) = s.coords();
        [x1, x2].iter().all(|x| (0.0..=grid.width()).contains(x))
            && [y1, y2].iter().all(|y| (0.0..=grid.height()).contains(y))
    }

    #[test]
    fn test_ne_all_on_covers_every_cell() {
        let grid = Grid::new(3, 3, 10.0, Point::default());
        let segments = ne_diagonal(&grid, &PatternList::parse(["1"]));
        assert_eq!(segments.len(), 9);
        for s in &segments {
            assert!(in_bounds(&grid, s), "out of bounds: {}", s);
            assert_eq!(s.dx(), 10.0);
            assert_eq!(s.dy(), 10.0);
        }
    }

    #[test]
    fn test_nw_all_on_covers_every_cell() {
        let grid = Grid::new(3, 3, 10.0, Point::default());
        let segments = nw_diagonal(&grid, &PatternList::parse(["1"]));
        assert_eq!(segments.len(), 9);
        for s in &segments {
            assert!(in_bounds(&grid, s), "out of bounds: {}", s);
            assert_eq!(s.dx(), -10.0);
            assert_eq!(s.dy(), 10.0);
        }
    }

    #[test]
    fn test_ne_diagonal_index_counts_clipped_diagonals() {
        // Starting columns -2..=2 get patterns 0..=4; only the diagonal
        // starting at column 0 (index 2) is on.
        let grid = Grid::new(2, 2, 1.0, Point::default());
        let patterns = PatternList::parse(["0", "0", "1", "0", "0"]);
        let coords: Vec<_> = ne_diagonal(&grid, &patterns)
            .iter()
            .map(|s| s.coords())
            .collect();
        assert_eq!(coords, vec![(0.0, 0.0, 1.0, 1.0), (1.0, 1.0, 2.0, 2.0)]);
    }

    #[test]
    fn test_nw_enumerates_right_to_left() {
        // Starting columns 3, 2, 1, 0, -1 get patterns 0..=4; index 1 is the
        // diagonal from the lower-right corner.
        let grid = Grid::new(2, 2, 1.0, Point::default());
        let patterns = PatternList::parse(["0", "1", "0", "0", "0"]);
        let coords: Vec<_> = nw_diagonal(&grid, &patterns)
            .iter()
            .map(|s| s.coords())
            .collect();
        assert_eq!(coords, vec![(2.0, 0.0, 1.0, 1.0), (1.0, 1.0, 0.0, 2.0)]);
    }

    #[test]
    fn test_pattern_indexed_by_row() {
        let grid = Grid::new(3, 3, 1.0, Point::default());
        let segments = ne_diagonal(&grid, &PatternList::parse(["01"]));
        assert!(segments.iter().all(|s| s.start.y == 1.0));
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_negative_dimensions_draw_nothing() {
        let grid = Grid::new(-2, -3, 1.0, Point::default());
        let on = PatternList::parse(["1"]);
        assert!(ne_diagonal(&grid, &on).is_empty());
        assert!(nw_diagonal(&grid, &on).is_empty());
    }
}
