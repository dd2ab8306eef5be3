//! Colored character-grid preview for the terminal.
//!
//! Each grid cell is two characters wide and two tall: grid intersections
//! sit on even coordinates, edges and diagonals on odd ones. Lines are
//! rasterized one cell step at a time and painted in the pen's color.

use anyhow::Result;
use std::io::{self, Write};
use stitch_core::{Color, Grid, Pen, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Glyph {
    ch: char,
    color: Color,
}

/// Pen that draws onto a character canvas and prints it on `update()`
pub struct TerminalPen<W: Write = io::Stdout> {
    grid: Grid,
    width: usize,
    height: usize,
    canvas: Vec<Option<Glyph>>,
    color: Color,
    position: Point,
    colored: bool,
    out: W,
    frames: usize,
    error: Option<io::Error>,
}

impl TerminalPen<io::Stdout> {
    /// Preview `grid` on stdout
    pub fn stdout(grid: Grid) -> Self {
        Self::new(grid, io::stdout(), true)
    }
}

impl<W: Write> TerminalPen<W> {
    pub fn new(grid: Grid, out: W, colored: bool) -> Self {
        let width = (2 * grid.cols.max(0) + 1) as usize;
        let height = (2 * grid.rows.max(0) + 1) as usize;
        Self {
            grid,
            width,
            height,
            canvas: vec![None; width * height],
            color: Color::BLACK,
            position: Point::default(),
            colored,
            out,
            frames: 0,
            error: None,
        }
    }

    /// Number of frames printed so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The current canvas, top row first
    pub fn frame(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            let row = &self.canvas[y * self.width..(y + 1) * self.width];
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Some(glyph) if self.colored => glyph.color.paint(&glyph.ch.to_string()).to_string(),
                    Some(glyph) => glyph.ch.to_string(),
                    None => " ".to_string(),
                })
                .collect();
            text.push_str(line.trim_end());
            text.push('\n');
        }
        text
    }

    /// Surface any write error from earlier updates and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn plot(&mut self, x: f64, y: f64, ch: char) {
        let (x, y) = (x.round(), y.round());
        if x < 0.0 || y < 0.0 || x >= self.width as f64 || y >= self.height as f64 {
            return;
        }
        let index = y as usize * self.width + x as usize;
        let ch = match (self.canvas[index].map(|g| g.ch), ch) {
            (Some('/'), '\\') | (Some('\\'), '/') | (Some('X'), '/' | '\\') => 'X',
            _ => ch,
        };
        self.canvas[index] = Some(Glyph {
            ch,
            color: self.color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let (c0, r0) = self.grid.locate(from);
        let (c1, r1) = self.grid.locate(to);
        let (dc, dr) = (c1 - c0, r1 - r0);
        let steps = dc.abs().max(dr.abs()).round() as i64;

        let ch = if dr.abs() < f64::EPSILON {
            '-'
        } else if dc.abs() < f64::EPSILON {
            '|'
        } else if (dc > 0.0) == (dr > 0.0) {
            '/'
        } else {
            '\\'
        };

        for k in 0..steps {
            let t = (k as f64 + 0.5) / steps as f64;
            self.plot(2.0 * (c0 + t * dc), 2.0 * (r0 + t * dr), ch);
        }
    }
}

impl<W: Write> Pen for TerminalPen<W> {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_thickness(&mut self, _thickness: f64) {}

    fn move_to(&mut self, point: Point, pen_down: bool) {
        if pen_down {
            self.draw_line(self.position, point);
        }
        self.position = point;
    }

    fn update(&mut self) {
        if self.error.is_some() {
            return;
        }
        let frame = self.frame();
        match writeln!(self.out, "{}", frame) {
            Ok(()) => self.frames += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stitch_core::{render, Family, PatternList, RenderConfig};

    fn plain_pen(grid: Grid) -> TerminalPen<Vec<u8>> {
        TerminalPen::new(grid, Vec::new(), false)
    }

    #[test]
    fn test_glyphs_for_each_direction() {
        let grid = Grid::new(1, 1, 10.0, Point::default());
        let mut pen = plain_pen(grid);
        pen.move_to(Point::new(0.0, 0.0), false);
        pen.move_to(Point::new(10.0, 0.0), true);
        pen.move_to(Point::new(0.0, 0.0), false);
        pen.move_to(Point::new(0.0, 10.0), true);
        pen.move_to(Point::new(0.0, 0.0), false);
        pen.move_to(Point::new(10.0, 10.0), true);
        assert_eq!(pen.frame(), "\n|/\n -\n");
    }

    #[test]
    fn test_crossing_diagonals() {
        let grid = Grid::new(1, 1, 1.0, Point::default());
        let mut pen = plain_pen(grid);
        pen.move_to(Point::new(0.0, 0.0), false);
        pen.move_to(Point::new(1.0, 1.0), true);
        pen.move_to(Point::new(1.0, 0.0), false);
        pen.move_to(Point::new(0.0, 1.0), true);
        assert_eq!(pen.frame(), "\n X\n\n");
    }

    #[test]
    fn test_render_prints_one_frame_per_layer() {
        let config = RenderConfig::blank(2, 1, 4.0)
            .with_patterns(Family::Horizontal, PatternList::parse(["1"]));
        let mut pen = plain_pen(config.grid());
        render(&config, &mut pen);
        assert_eq!(pen.frames(), 4);
        assert_eq!(pen.frame(), " - -\n\n - -\n");

        let out = String::from_utf8(pen.finish().unwrap()).unwrap();
        assert_eq!(out.lines().filter(|line| *line == " - -").count(), 8);
    }

    #[test]
    fn test_no_animation_prints_once() {
        let mut config = RenderConfig::default();
        config.no_animation = true;
        let mut pen = plain_pen(config.grid());
        render(&config, &mut pen);
        assert_eq!(pen.frames(), 1);
    }
}
