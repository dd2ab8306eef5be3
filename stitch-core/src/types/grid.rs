//! The cell grid that stitches are laid out on.

use super::geometry::Point;

/// A rectangular grid of `cols` x `rows` square cells.
///
/// `origin` is the lower-left corner. Dimensions are signed: a negative
/// count is allowed and simply yields no stitches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub cols: i64,
    pub rows: i64,
    pub cell: f64,
    pub origin: Point,
}

impl Grid {
    pub fn new(cols: i64, rows: i64, cell: f64, origin: Point) -> Self {
        Self {
            cols,
            rows,
            cell,
            origin,
        }
    }

    /// Grid centered on the drawing-plane origin
    pub fn centered(cols: i64, rows: i64, cell: f64) -> Self {
        let origin = Point::new(
            -(cols as f64) * cell / 2.0,
            -(rows as f64) * cell / 2.0,
        );
        Self::new(cols, rows, cell, origin)
    }

    /// Drawing-plane position of grid intersection (`col`, `row`)
    pub fn point(&self, col: i64, row: i64) -> Point {
        Point::new(
            self.origin.x + col as f64 * self.cell,
            self.origin.y + row as f64 * self.cell,
        )
    }

    /// Total width (`cols * cell`)
    pub fn width(&self) -> f64 {
        self.cols as f64 * self.cell
    }

    /// Total height (`rows * cell`)
    pub fn height(&self) -> f64 {
        self.rows as f64 * self.cell
    }

    /// Fractional (col, row) of a drawing-plane point
    pub fn locate(&self, point: Point) -> (f64, f64) {
        (
            (point.x - self.origin.x) / self.cell,
            (point.y - self.origin.y) / self.cell,
        )
    }
}
