//! The drawing capability consumed by the renderer.
//!
//! A pen holds a position, a color and a thickness. Backends implement
//! [`Pen`]; segment generation never touches one.

use crate::types::{Color, Point, Segment};

/// A stateful drawing pen
pub trait Pen {
    fn set_color(&mut self, color: Color);

    fn set_thickness(&mut self, thickness: f64);

    /// Move to `point`, drawing a line from the current position if `pen_down`
    fn move_to(&mut self, point: Point, pen_down: bool);

    /// Flush what has been drawn so far (incremental redraw)
    fn update(&mut self) {}
}

/// Draw one segment: lift the pen, jump to the start, draw to the end
pub fn draw_segment<P: Pen + ?Sized>(pen: &mut P, segment: &Segment) {
    pen.move_to(segment.start, false);
    pen.move_to(segment.end, true);
}

/// A single call made on a pen
#[derive(Clone, Debug, PartialEq)]
pub enum PenCommand {
    SetColor(Color),
    SetThickness(f64),
    MoveTo { point: Point, pen_down: bool },
    Update,
}

/// A pen that only records the calls made on it
#[derive(Debug, Default)]
pub struct RecordingPen {
    commands: Vec<PenCommand>,
}

impl RecordingPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PenCommand] {
        &self.commands
    }

    /// Every line drawn with the pen down, in drawing order
    pub fn segments(&self) -> Vec<Segment> {
        let mut position = Point::default();
        let mut segments = Vec::new();
        for command in &self.commands {
            if let PenCommand::MoveTo { point, pen_down } = command {
                if *pen_down {
                    segments.push(Segment::new(position, *point));
                }
                position = *point;
            }
        }
        segments
    }

    /// Number of `update()` calls seen
    pub fn update_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PenCommand::Update))
            .count()
    }
}

impl Pen for RecordingPen {
    fn set_color(&mut self, color: Color) {
        self.commands.push(PenCommand::SetColor(color));
    }

    fn set_thickness(&mut self, thickness: f64) {
        self.commands.push(PenCommand::SetThickness(thickness));
    }

    fn move_to(&mut self, point: Point, pen_down: bool) {
        self.commands.push(PenCommand::MoveTo { point, pen_down });
    }

    fn update(&mut self) {
        self.commands.push(PenCommand::Update);
    }
}
