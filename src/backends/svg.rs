//! SVG document backend.
//!
//! Every pen-down move becomes one `<line>` element carrying the pen's
//! current stroke color and width. The drawing plane has y pointing up, so
//! y is negated on the way out.

use anyhow::{Context, Result};
use std::path::Path;
use stitch_core::{Color, Pen, Point};
use svg::node::element::Line;
use svg::Document;

/// Margin around the drawing, in drawing units
const MARGIN: f64 = 10.0;

/// Pen that accumulates SVG line elements
pub struct SvgPen {
    color: Color,
    thickness: f64,
    position: Point,
    lines: Vec<Line>,
    /// (min_x, min_y, max_x, max_y) of everything drawn, in drawing-plane units
    bounds: Option<(f64, f64, f64, f64)>,
    max_thickness: f64,
}

impl SvgPen {
    pub fn new() -> Self {
        Self {
            color: Color::BLACK,
            thickness: 1.0,
            position: Point::default(),
            lines: Vec::new(),
            bounds: None,
            max_thickness: 0.0,
        }
    }

    /// Number of lines drawn so far
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn extend_bounds(&mut self, p: Point) {
        self.bounds = Some(match self.bounds {
            None => (p.x, p.y, p.x, p.y),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(p.x),
                min_y.min(p.y),
                max_x.max(p.x),
                max_y.max(p.y),
            ),
        });
    }

    /// Build the SVG document for everything drawn so far
    pub fn document(&self) -> Document {
        let (min_x, min_y, max_x, max_y) = self.bounds.unwrap_or((0.0, 0.0, 0.0, 0.0));
        let pad = MARGIN + self.max_thickness / 2.0;
        let width = max_x - min_x + 2.0 * pad;
        let height = max_y - min_y + 2.0 * pad;

        let document = Document::new()
            .set("viewBox", (min_x - pad, -max_y - pad, width, height))
            .set("width", width)
            .set("height", height)
            .set("fill", "none");

        self.lines
            .iter()
            .cloned()
            .fold(document, |document, line| document.add(line))
    }

    /// Write the document to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        svg::save(path, &self.document())
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

impl Default for SvgPen {
    fn default() -> Self {
        Self::new()
    }
}

impl Pen for SvgPen {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_thickness(&mut self, thickness: f64) {
        self.thickness = thickness;
    }

    fn move_to(&mut self, point: Point, pen_down: bool) {
        if pen_down {
            let line = Line::new()
                .set("x1", self.position.x)
                .set("y1", -self.position.y)
                .set("x2", point.x)
                .set("y2", -point.y)
                .set("stroke", self.color.to_string())
                .set("stroke-width", self.thickness)
                .set("stroke-linecap", "round");
            self.lines.push(line);
            self.extend_bounds(self.position);
            self.extend_bounds(point);
            self.max_thickness = self.max_thickness.max(self.thickness);
        }
        self.position = point;
    }
}
